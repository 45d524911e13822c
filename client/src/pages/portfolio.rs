//! Project showcase.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

/// Where a project's call-to-action points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectLink {
    /// Opens a live demo in a new tab.
    Demo(&'static str),
    /// Downloads a packaged build.
    Download(&'static str),
}

impl ProjectLink {
    pub fn url(self) -> &'static str {
        match self {
            Self::Demo(url) | Self::Download(url) => url,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Demo(_) => "Live Demo",
            Self::Download(_) => "Download File",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub link: ProjectLink,
}

pub static PROJECTS: [Project; 5] = [
    Project {
        title: "E-Commerce Platform",
        category: "Web Development",
        description: "Modern e-commerce solution with advanced features",
        link: ProjectLink::Demo("https://www.amazon.com"),
    },
    Project {
        title: "Portfolio Website",
        category: "Portfolio Design",
        description: "Clean and professional portfolio showcase",
        link: ProjectLink::Demo("https://www.behance.net"),
    },
    Project {
        title: "AI Chat Application",
        category: "AI/ML",
        description: "Intelligent chatbot with natural language processing",
        link: ProjectLink::Download(
            "https://drive.google.com/file/d/1qIK-SmHxOTmmSYZdQ819NfYVSneEtfyA/view?usp=drive_link",
        ),
    },
    Project {
        title: "Zomato Clone",
        category: "Web Development",
        description: "A fully responsive Zomato-inspired food ordering application",
        link: ProjectLink::Demo("https://www.zomato.com"),
    },
    Project {
        title: "Bus Ticket Booking System",
        category: "Web Development",
        description: "A user-friendly bus ticket booking platform",
        link: ProjectLink::Demo("https://www.redbus.in"),
    },
];

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="page portfolio">
            <h1>"See Our Work in Action"</h1>
            <div class="card-grid">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        let target = matches!(p.link, ProjectLink::Demo(_)).then_some("_blank");
                        view! {
                            <div class="card project">
                                <span class="project__category">{p.category}</span>
                                <h3>{p.title}</h3>
                                <p>{p.description}</p>
                                <a
                                    class="button button--primary"
                                    href=p.link.url()
                                    target=target
                                    rel="noopener noreferrer"
                                >
                                    {p.link.label()}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
