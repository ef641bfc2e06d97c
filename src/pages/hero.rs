use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config;
use crate::pages::showcase::SHOWCASE_ANCHOR;

fn scroll_to_projects() {
    let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SHOWCASE_ANCHOR))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_projects());

    html! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    <span class="hero-greeting">{"Hi, I'm "}</span>
                    <span class="hero-name">{config::OWNER_FIRST_NAME}</span>
                </h1>
                <div class="hero-copy">
                    <h2>{config::OWNER_ROLE}</h2>
                    <p>{config::OWNER_TAGLINE}</p>
                </div>
                <div class="hero-cta-wrapper">
                    <button class="hero-cta" onclick={onclick}>
                        {"View My Work"}
                    </button>
                </div>
                <div class="scroll-indicator">
                    <span>{"Scroll to explore"}</span>
                    <div class="scroll-line"></div>
                </div>
            </div>
            <div class="hero-blob hero-blob-blue"></div>
            <div class="hero-blob hero-blob-purple"></div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, var(--page-bg), var(--surface), var(--page-bg));
                }
                .hero-glow {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 50% 50%, rgba(0, 122, 255, 0.05), transparent 50%);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    padding: 0 1rem;
                    text-align: center;
                    animation: heroRise 0.5s ease-out both;
                }
                .hero-title {
                    font-size: clamp(3.75rem, 10vw, 8rem);
                    letter-spacing: -0.025em;
                    line-height: 1;
                    margin: 0 0 2rem;
                }
                .hero-greeting {
                    font-weight: 600;
                }
                .hero-name {
                    font-weight: 900;
                }
                .hero-copy h2 {
                    font-size: clamp(1.5rem, 4vw, 3rem);
                    font-weight: 700;
                    color: var(--subtle-gray);
                    margin: 0 0 1rem;
                }
                .hero-copy p {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: clamp(1.125rem, 2vw, 1.5rem);
                    line-height: 1.6;
                    color: var(--subtle-gray);
                }
                .hero-cta-wrapper {
                    padding-top: 2rem;
                }
                .hero-cta {
                    border: none;
                    border-radius: 9999px;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #fff;
                    background: linear-gradient(90deg, var(--accent-blue), #2563eb);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-2px) scale(1.05);
                    box-shadow: 0 25px 50px -12px rgba(59, 130, 246, 0.25);
                }
                .hero-cta:active {
                    transform: scale(0.98);
                }
                .scroll-indicator {
                    padding-top: 4rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    animation: heroBob 2s ease-in-out infinite;
                }
                .scroll-indicator span {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: var(--subtle-gray);
                }
                .scroll-line {
                    width: 1px;
                    height: 120px;
                    background: linear-gradient(to bottom, var(--subtle-gray), transparent);
                    animation: heroStretch 2s ease-in-out infinite;
                }
                .hero-blob {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(24px);
                }
                .hero-blob-blue {
                    top: 5rem;
                    left: 2.5rem;
                    width: 5rem;
                    height: 5rem;
                    background: rgba(0, 122, 255, 0.1);
                    animation: heroFloatUp 6s ease-in-out infinite;
                }
                .hero-blob-purple {
                    bottom: 5rem;
                    right: 2.5rem;
                    width: 8rem;
                    height: 8rem;
                    background: rgba(139, 92, 246, 0.1);
                    animation: heroFloatDown 8s ease-in-out 2s infinite;
                }
                @keyframes heroRise {
                    from { opacity: 0; transform: translateY(50px) scale(0.9); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes heroBob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(8px); }
                }
                @keyframes heroStretch {
                    0%, 100% { height: 120px; }
                    50% { height: 130px; }
                }
                @keyframes heroFloatUp {
                    0%, 100% { transform: translateY(0) rotate(0deg); }
                    50% { transform: translateY(-20px) rotate(5deg); }
                }
                @keyframes heroFloatDown {
                    0%, 100% { transform: translateY(0) rotate(0deg); }
                    50% { transform: translateY(20px) rotate(-5deg); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .hero-content, .scroll-indicator, .scroll-line, .hero-blob {
                        animation: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
