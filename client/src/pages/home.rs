//! Landing page: hero, service preview, testimonials.

use leptos::prelude::*;

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Priya",
        role: "Software Engineer",
        content: "The resume design service was exceptional! I received multiple interview calls within a week of updating my resume.",
    },
    Testimonial {
        name: "Swetha",
        role: "UX Designer",
        content: "My portfolio website looks amazing and has helped me land several freelance projects. Highly recommended!",
    },
    Testimonial {
        name: "Ananya Gupta",
        role: "Marketing Specialist",
        content: "The LinkedIn optimization service transformed my profile. I've seen a 200% increase in profile views and connection requests.",
    },
    Testimonial {
        name: "Vikram Singh",
        role: "Startup Founder",
        content: "Shibiraj developed an e-commerce platform for my business that exceeded all expectations. The attention to detail was impressive.",
    },
    Testimonial {
        name: "Madhan Gowri",
        role: "Content Creator",
        content: "The portfolio design perfectly showcases my work. I've received so many compliments on the clean, professional layout.",
    },
];

const PREVIEW: [(&str, &str); 3] = [
    ("Resume Design", "Professional ATS-friendly resumes tailored to your career goals."),
    ("Portfolio Creation", "Showcase your work with a stunning portfolio website."),
    ("Project Development", "Custom software solutions for your business needs."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <section class="hero">
                <h1 class="hero__title">
                    "Creative Resumes, Portfolios & Projects"
                    <span class="hero__tagline">"Build Your Bridge to Success!"</span>
                </h1>
                <p class="hero__lead">"If You Want to Crack the System, First Understand It."</p>
                <div class="hero__actions">
                    <a href="/services" class="button button--primary">"Get Started"</a>
                    <a href="/contact" class="button button--secondary">"Contact Me"</a>
                </div>
            </section>

            <section class="home__services">
                <h2>"Our Services"</h2>
                <div class="card-grid">
                    {PREVIEW
                        .iter()
                        .map(|&(title, blurb)| {
                            view! {
                                <div class="card">
                                    <h3>{title}</h3>
                                    <p>{blurb}</p>
                                    <a href="/services">"Learn More →"</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials">
                <h2>"What Our Clients Say"</h2>
                <p class="testimonials__lead">
                    "Hear from professionals who have transformed their careers with our services"
                </p>
                <div class="testimonials__track">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="testimonial">
                                    <blockquote>{t.content}</blockquote>
                                    <figcaption>
                                        <strong>{t.name}</strong>
                                        <span>{t.role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
