use yew::prelude::*;

use crate::components::stat_counter::StatCounter;
use crate::contact::ContactSection;
use crate::effects::{use_parallax, use_reveal_on_scroll};

struct Service {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🤖",
        title: "AI Solutions",
        body: "Custom models, assistants and automation built around how your team already works.",
    },
    Service {
        icon: "💻",
        title: "Software Development",
        body: "Web platforms, APIs and internal tools, shipped in small, reviewable steps.",
    },
    Service {
        icon: "☁️",
        title: "Cloud & DevOps",
        body: "Infrastructure you can reason about: reproducible deploys, monitoring, sane costs.",
    },
    Service {
        icon: "📊",
        title: "Data Engineering",
        body: "Pipelines and warehouses that turn scattered data into numbers people trust.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let hero_background = use_node_ref();
    use_parallax(hero_background.clone());
    use_reveal_on_scroll();

    html! {
        <main class="landing-page">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 30% 30%, rgba(99, 102, 241, 0.35), transparent 60%),
                                radial-gradient(circle at 70% 70%, rgba(6, 182, 212, 0.25), transparent 60%);
                    z-index: -1;
                    will-change: transform;
                }
                [data-aos] {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                [data-aos].aos-animate {
                    opacity: 1;
                    transform: none;
                }
                .services-grid, .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .stat-number {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #6366f1;
                }
                .contact-form .error-message {
                    color: #ef4444;
                    font-size: 0.85rem;
                    min-height: 1.2em;
                    display: block;
                }
                .form-success {
                    display: none;
                    padding: 1rem;
                    border-radius: 8px;
                    background: rgba(16, 185, 129, 0.2);
                    border: 1px solid #10b981;
                    color: #10b981;
                }
                .form-success.show {
                    display: block;
                }
                .form-success.error {
                    background: rgba(239, 68, 68, 0.2);
                    border-color: #ef4444;
                    color: #ef4444;
                }
                "#}
            </style>

            <section id="home" class="hero">
                <div class="hero-background" ref={hero_background}></div>
                <div class="hero-content" data-aos="fade-up">
                    <h1>{"Software that thinks ahead"}</h1>
                    <p class="hero-subtitle">
                        {"NovaRegis is an AI and software service agency. We design, build and run the systems your business depends on."}
                    </p>
                    <a href="#contact" class="btn btn-primary">{"Start a project"}</a>
                </div>
            </section>

            <section id="services" class="services">
                <h2 data-aos="fade-up">{"What we do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card" data-aos="fade-up">
                            <div class="service-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p>{ service.body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about" class="about">
                <h2 data-aos="fade-up">{"Why teams work with us"}</h2>
                <p data-aos="fade-up">
                    {"Small senior teams, plain communication and code you keep owning after we leave."}
                </p>
                <div class="stats-grid">
                    <StatCounter target={150} suffix="+" label="Projects delivered" />
                    <StatCounter target={98} suffix="%" label="Client satisfaction" />
                    <StatCounter target={12} label="Years in business" />
                    <StatCounter target={40} label="Engineers" />
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 data-aos="fade-up">{"Get in touch"}</h2>
                <p data-aos="fade-up">{"Tell us about your project and we'll get back to you within two business days."}</p>
                <ContactSection />
            </section>

            <footer class="footer">
                <p>{"© NovaRegis. All rights reserved."}</p>
            </footer>
        </main>
    }
}
