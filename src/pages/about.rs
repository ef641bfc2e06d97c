use yew::prelude::*;

use crate::components::animated_section::{AnimatedSection, Animation};

const TECHNOLOGIES: &[&str] = &[
    "TypeScript", "React", "Next.js", "Node.js", "Python",
    "PostgreSQL", "AWS", "Docker", "OpenAI API", "Tailwind CSS",
];

const PHILOSOPHY: &[&str] = &[
    "Clean, maintainable code that scales",
    "AI-first development approach",
    "User-centered design thinking",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about-section">
            <div class="about-inner">
                <AnimatedSection animation={Animation::Dramatic} delay={0.2}>
                    <div class="section-heading">
                        <h2>{"About Me"}</h2>
                        <p>{"Building the future with AI-first development principles"}</p>
                    </div>
                </AnimatedSection>

                <div class="about-grid">
                    <div class="about-bio">
                        <AnimatedSection animation={Animation::SlideLeft} delay={0.4}>
                            <div class="bio-text">
                                <p class="bio-lead">
                                    {"I'm a software engineer passionate about creating innovative solutions that push the boundaries of what's possible with modern technology."}
                                </p>
                                <p>
                                    {"My approach to development centers around AI-first principles, clean architecture, and building tools that genuinely improve people's lives. Every line of code is an opportunity to craft something extraordinary."}
                                </p>
                                <p>
                                    {"With experience across the full stack, from React and Next.js frontends to Node.js backends and cloud infrastructure, I focus on creating applications that are not just functional, but delightful to use."}
                                </p>
                            </div>
                        </AnimatedSection>

                        <AnimatedSection animation={Animation::FadeUp} delay={0.6}>
                            <div class="philosophy">
                                <h3>{"Core Philosophy"}</h3>
                                {
                                    PHILOSOPHY.iter().map(|item| html! {
                                        <div class="philosophy-item">
                                            <div class="philosophy-dot"></div>
                                            <p>{*item}</p>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </AnimatedSection>
                    </div>

                    <div class="about-tech">
                        <AnimatedSection animation={Animation::SlideRight} delay={0.5}>
                            <h3>{"Technologies I Love"}</h3>
                            <div class="tech-grid">
                                {
                                    TECHNOLOGIES.iter().enumerate().map(|(index, tech)| html! {
                                        <AnimatedSection
                                            key={*tech}
                                            animation={Animation::Scale}
                                            delay={0.7 + index as f64 * 0.1}
                                        >
                                            <div class="tech-tile">
                                                <span>{*tech}</span>
                                            </div>
                                        </AnimatedSection>
                                    }).collect::<Html>()
                                }
                            </div>
                        </AnimatedSection>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about-section {
                    position: relative;
                    padding: 8rem 1rem;
                    background: linear-gradient(to bottom, var(--page-bg), var(--surface));
                }
                .about-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .section-heading h2 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 900;
                    margin: 0 0 2rem;
                }
                .section-heading p {
                    max-width: 56rem;
                    margin: 0 auto;
                    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                    line-height: 1.6;
                    color: var(--subtle-gray);
                }
                .about-grid {
                    display: grid;
                    gap: 5rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .bio-text p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: var(--subtle-gray);
                }
                .bio-text .bio-lead {
                    font-size: 1.375rem;
                    font-weight: 500;
                    color: var(--page-fg);
                }
                .philosophy {
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                }
                .philosophy h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1.5rem;
                }
                .philosophy-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .philosophy-item p {
                    margin: 0 0 1rem;
                    color: var(--subtle-gray);
                }
                .philosophy-dot {
                    flex-shrink: 0;
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-top: 0.5rem;
                    border-radius: 9999px;
                    background: var(--accent-blue);
                }
                .about-tech h3 {
                    font-size: 1.875rem;
                    margin: 0 0 2rem;
                }
                .tech-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .tech-tile {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--card-bg);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    font-weight: 600;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .tech-tile:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                "#}
            </style>
        </section>
    }
}
