use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{EmailIcon, GitHubIcon, LinkedInIcon};
use crate::config;
use crate::theme::toggle::ThemeToggle;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::OWNER_FULL_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-connect">
                    <h2>{"Let's Connect"}</h2>
                    <p>{"Interested in working together or have a question? I'd love to hear from you."}</p>
                    <div class="footer-resume">
                        <a href={config::RESUME_PATH} target="_blank" rel="noopener noreferrer">
                            {"Download Resume"}
                        </a>
                    </div>
                </div>

                <div class="footer-social">
                    <a
                        href={config::GITHUB_PROFILE}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Visit GitHub profile"
                    >
                        <GitHubIcon />
                    </a>
                    <a
                        href={config::LINKEDIN_PROFILE}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Visit LinkedIn profile"
                    >
                        <LinkedInIcon />
                    </a>
                    <a href={format!("mailto:{}", config::SOCIAL_EMAIL)} aria-label="Send email">
                        <EmailIcon />
                    </a>
                    <ThemeToggle />
                </div>

                <div class="footer-copyright">
                    <p>{copyright_line(year)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid var(--border);
                    padding: 3rem 1rem;
                }
                .footer-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .footer-connect {
                    margin-bottom: 3rem;
                    text-align: center;
                }
                .footer-connect h2 {
                    font-size: clamp(1.5rem, 3vw, 1.875rem);
                    font-weight: 700;
                }
                .footer-connect p {
                    max-width: 42rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    color: var(--subtle-gray);
                }
                .footer-resume {
                    padding-top: 2rem;
                }
                .footer-resume a {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    background: var(--accent-blue);
                    color: #fff;
                    font-weight: 500;
                    text-decoration: none;
                }
                .footer-social {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .footer-social a {
                    display: flex;
                    padding: 0.75rem;
                    color: var(--subtle-gray);
                    transition: color 0.2s ease;
                }
                .footer-social a:hover {
                    color: var(--accent-blue);
                }
                .footer-copyright {
                    text-align: center;
                    font-size: 0.875rem;
                    color: var(--subtle-gray);
                }
                "#}
            </style>
        </footer>
    }
}
