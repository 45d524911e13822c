//! Service catalogue page.

use leptos::prelude::*;

pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

pub static SERVICES: [Service; 4] = [
    Service {
        title: "Resume Design",
        summary: "Professional ATS-friendly resumes tailored to your career goals.",
        features: &["ATS-friendly layout", "Role-specific keywords", "Cover letter add-on"],
    },
    Service {
        title: "Portfolio Creation",
        summary: "Showcase your work with a stunning portfolio website.",
        features: &["Responsive design", "Project case studies", "Hosting setup"],
    },
    Service {
        title: "LinkedIn Optimization",
        summary: "A profile that recruiters find and remember.",
        features: &["Headline and summary rewrite", "Skills and endorsements", "Banner design"],
    },
    Service {
        title: "Project Development",
        summary: "Custom software solutions for your business needs.",
        features: &["Web applications", "E-commerce", "SEO setup"],
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page services">
            <h1>"Our Services"</h1>
            <div class="card-grid">
                {SERVICES
                    .iter()
                    .map(|s| {
                        view! {
                            <div class="card">
                                <h3>{s.title}</h3>
                                <p>{s.summary}</p>
                                <ul>
                                    {s.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                                <a href="/contact" class="button button--primary">"Get a Quote"</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
