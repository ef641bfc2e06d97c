use yew::prelude::*;

use crate::components::icons::{GitHubIcon, PaperIcon, PlayIcon};
use crate::embed::DemoKind;
use crate::modal::controller::ModalContent;
use crate::modal::demo_modal::DemoModal;
use crate::modal::hook::use_modal;
use crate::pages::showcase::Orientation;
use crate::projects::Project;

/// "01", "02", ... for zero-based `index`.
pub fn card_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub index: usize,
    #[prop_or(Orientation::Normal)]
    pub orientation: Orientation,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let modal = use_modal();

    let open_with = |kind: DemoKind, url: &'static str| {
        let open = modal.open.clone();
        Callback::from(move |_: MouseEvent| {
            open.emit(ModalContent::new(project.title, url, kind));
        })
    };

    let view_demo = open_with(DemoKind::Demo, project.demo_url);
    let view_code = open_with(DemoKind::Code, project.repo_url);
    let read_paper = project.paper_url.map(|url| open_with(DemoKind::Paper, url));

    let mirrored = props.orientation == Orientation::Mirrored;

    html! {
        <>
            <DemoModal state={modal.state.clone()} on_close={modal.close.clone()} />

            <article class={classes!("project-card", mirrored.then(|| "mirrored"))}>
                <div class="project-media">
                    <div class="project-frame">
                        <div class="project-frame-overlay"></div>
                        <div class="project-image">
                            <img src={project.image_path} alt={project.image_alt} loading="lazy" />
                        </div>
                        <div class="project-quick-actions">
                            <button class="quick-action" onclick={view_demo.clone()} aria-label="View demo">
                                <PlayIcon size={20} />
                            </button>
                            <button class="quick-action" onclick={view_code.clone()} aria-label="View code">
                                <GitHubIcon size={20} />
                            </button>
                        </div>
                    </div>
                </div>

                <div class="project-body">
                    <div class="project-number">{card_number(props.index)}</div>
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-description">{project.description}</p>

                    <div class="project-stack">
                        {
                            project.tech_stack.iter().map(|tech| html! {
                                <span key={*tech} class="tech-chip">{*tech}</span>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="project-actions">
                        <button class="action-primary" onclick={view_demo}>
                            <span>{"View Demo"}</span>
                            <PlayIcon size={16} />
                        </button>
                        <button class="action-secondary" onclick={view_code}>
                            <span>{"View Code"}</span>
                            <GitHubIcon size={16} />
                        </button>
                        {
                            if let Some(read_paper) = read_paper {
                                html! {
                                    <button class="action-paper" onclick={read_paper}>
                                        <span>{"Read Paper"}</span>
                                        <PaperIcon size={16} />
                                    </button>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(play_url) = project.play_url {
                                html! {
                                    <a class="action-secondary" href={play_url} target="_blank" rel="noopener noreferrer">
                                        <span>{"Play"}</span>
                                        <PlayIcon size={16} />
                                    </a>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </article>
            <style>
                {r#"
                .project-card {
                    position: relative;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                    transition: transform 0.3s ease;
                }
                .project-card:hover {
                    transform: translateY(-8px);
                }
                @media (min-width: 1024px) {
                    .project-card {
                        grid-template-columns: 1fr 1fr;
                    }
                    .project-card.mirrored .project-media {
                        order: 2;
                    }
                    .project-card.mirrored .project-body {
                        order: 1;
                    }
                }
                .project-frame {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    background: linear-gradient(135deg, var(--surface), var(--border));
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                }
                .project-media:hover .project-frame {
                    transform: scale(1.02);
                }
                .project-frame-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    opacity: 0;
                    background: linear-gradient(135deg, rgba(0, 122, 255, 0.1), transparent, rgba(139, 92, 246, 0.1));
                    transition: opacity 0.5s ease;
                    pointer-events: none;
                }
                .project-card:hover .project-frame-overlay {
                    opacity: 1;
                }
                .project-image {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .project-card:hover .project-image img {
                    transform: scale(1.1);
                }
                .project-quick-actions {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 20;
                    display: flex;
                    gap: 0.75rem;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .project-card:hover .project-quick-actions {
                    opacity: 1;
                }
                .quick-action {
                    display: flex;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: var(--card-bg);
                    color: var(--page-fg);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .quick-action:hover {
                    transform: scale(1.1);
                }
                .project-body > * + * {
                    margin-top: 2rem;
                }
                .project-number {
                    font-size: clamp(3.75rem, 7vw, 4.5rem);
                    font-weight: 900;
                    color: rgba(0, 122, 255, 0.2);
                }
                .project-title {
                    margin-bottom: 0;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 900;
                    line-height: 1.1;
                }
                .project-description {
                    font-size: clamp(1.25rem, 2vw, 1.5rem);
                    line-height: 1.6;
                    color: var(--subtle-gray);
                }
                .project-stack {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .tech-chip {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(0, 122, 255, 0.2);
                    background: rgba(0, 122, 255, 0.1);
                    color: var(--accent-blue);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .project-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding-top: 1rem;
                }
                .project-actions button,
                .project-actions a {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    transition: transform 0.3s ease, border-color 0.3s ease, color 0.3s ease;
                }
                .project-actions button:hover,
                .project-actions a:hover {
                    transform: scale(1.05);
                }
                .action-primary {
                    border: none;
                    color: #fff;
                    background: linear-gradient(90deg, var(--accent-blue), #2563eb);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .action-secondary {
                    border: 2px solid rgba(107, 114, 128, 0.3);
                    background: transparent;
                    color: inherit;
                }
                .action-secondary:hover {
                    border-color: var(--accent-blue);
                    color: var(--accent-blue);
                }
                .action-paper {
                    border: 2px solid rgba(139, 92, 246, 0.3);
                    background: transparent;
                    color: var(--accent-purple);
                }
                .action-paper:hover {
                    border-color: var(--accent-purple);
                    background: rgba(139, 92, 246, 0.1);
                }
                "#}
            </style>
        </>
    }
}
