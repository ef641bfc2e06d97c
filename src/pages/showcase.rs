use yew::prelude::*;

use crate::components::animated_section::{AnimatedSection, Animation};
use crate::pages::project_card::ProjectCard;
use crate::projects::{Project, PROJECTS};

pub const SHOWCASE_ANCHOR: &str = "projects";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    Mirrored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardSlot {
    pub index: usize,
    pub project: &'static Project,
    pub orientation: Orientation,
    pub delay: f64,
}

/// One slot per project in catalog order. Even slots keep the image left,
/// odd slots mirror it.
pub fn card_slots(projects: &'static [Project]) -> Vec<CardSlot> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| CardSlot {
            index,
            project,
            orientation: if index % 2 == 1 {
                Orientation::Mirrored
            } else {
                Orientation::Normal
            },
            delay: 0.4 + index as f64 * 0.2,
        })
        .collect()
}

#[function_component(ProjectShowcase)]
pub fn project_showcase() -> Html {
    html! {
        <section id={SHOWCASE_ANCHOR} class="showcase">
            <div class="showcase-glow showcase-glow-blue"></div>
            <div class="showcase-glow showcase-glow-purple"></div>

            <div class="showcase-inner">
                <AnimatedSection animation={Animation::Dramatic} delay={0.2}>
                    <div class="section-heading">
                        <h2>{"Selected Work"}</h2>
                        <p>{"A curated collection of projects that showcase technical excellence, innovative problem-solving, and passion for creating exceptional user experiences."}</p>
                    </div>
                </AnimatedSection>

                <div class="showcase-list">
                    {
                        card_slots(PROJECTS).into_iter().map(|slot| html! {
                            <AnimatedSection
                                key={slot.project.id}
                                animation={Animation::Dramatic}
                                delay={slot.delay}
                            >
                                <ProjectCard
                                    project={slot.project}
                                    index={slot.index}
                                    orientation={slot.orientation}
                                />
                            </AnimatedSection>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .showcase {
                    position: relative;
                    padding: 8rem 1rem;
                    overflow: hidden;
                    background: linear-gradient(to bottom, var(--surface), var(--page-bg));
                }
                .showcase-glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .showcase-glow-blue {
                    background: radial-gradient(circle at 30% 20%, rgba(0, 122, 255, 0.03), transparent 50%);
                }
                .showcase-glow-purple {
                    background: radial-gradient(circle at 70% 80%, rgba(139, 92, 246, 0.03), transparent 50%);
                }
                .showcase-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .showcase-list {
                    display: flex;
                    flex-direction: column;
                    gap: 8rem;
                }
                "#}
            </style>
        </section>
    }
}
