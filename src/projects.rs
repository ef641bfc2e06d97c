//! The showcase catalog. Order here is display order.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub demo_url: &'static str,
    pub repo_url: &'static str,
    pub image_path: &'static str,
    pub image_alt: &'static str,
    pub paper_url: Option<&'static str>,
    pub play_url: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "ai-chat-app",
        title: "AI Chat Application",
        description: "A modern chat application powered by OpenAI GPT models with real-time messaging, conversation history, and customizable AI personas. Built to explore the intersection of AI and human communication.",
        tech_stack: &["Next.js", "TypeScript", "OpenAI API", "Tailwind CSS", "Prisma", "PostgreSQL"],
        demo_url: "https://ai-chat-demo.vercel.app",
        repo_url: "https://github.com/jeremiahcandelaria/ai-chat-app",
        image_path: "/projects/ai-chat-app.jpg",
        image_alt: "AI Chat Application interface showing conversation with AI assistant",
        paper_url: None,
        play_url: None,
    },
    Project {
        id: "task-automation-platform",
        title: "Task Automation Platform",
        description: "A workflow automation tool that connects various APIs and services to streamline repetitive tasks. Features a visual flow builder and supports complex conditional logic for business process automation.",
        tech_stack: &["React", "Node.js", "Express", "MongoDB", "Docker", "AWS Lambda"],
        demo_url: "https://automation-platform-demo.com",
        repo_url: "https://github.com/jeremiahcandelaria/task-automation",
        image_path: "/projects/automation-platform.jpg",
        image_alt: "Task automation platform dashboard with workflow builder interface",
        paper_url: None,
        play_url: None,
    },
    Project {
        id: "data-visualization-dashboard",
        title: "Real-time Analytics Dashboard",
        description: "Interactive dashboard for visualizing complex datasets with real-time updates. Supports multiple chart types, custom filters, and data export functionality for business intelligence applications.",
        tech_stack: &["Vue.js", "D3.js", "Python", "FastAPI", "Redis", "WebSockets"],
        demo_url: "https://analytics-dashboard-demo.netlify.app",
        repo_url: "https://github.com/jeremiahcandelaria/analytics-dashboard",
        image_path: "/projects/analytics-dashboard.jpg",
        image_alt: "Analytics dashboard showing various charts and real-time data visualizations",
        paper_url: None,
        play_url: None,
    },
    Project {
        id: "mobile-fitness-tracker",
        title: "Mobile Fitness Tracker",
        description: "Cross-platform mobile application for tracking workouts, nutrition, and health metrics. Includes social features, progress analytics, and integration with popular fitness devices and apps.",
        tech_stack: &["React Native", "Expo", "Firebase", "TypeScript", "Redux Toolkit"],
        demo_url: "https://fitness-tracker-demo.expo.dev",
        repo_url: "https://github.com/jeremiahcandelaria/fitness-tracker",
        image_path: "/projects/fitness-tracker.jpg",
        image_alt: "Mobile fitness tracker app showing workout logging and progress charts",
        paper_url: None,
        play_url: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn links_are_absolute() {
        for project in PROJECTS {
            assert!(project.demo_url.starts_with("https://"), "{}", project.id);
            assert!(project.repo_url.starts_with("https://github.com/"), "{}", project.id);
            assert!(project.image_path.starts_with('/'), "{}", project.id);
            assert!(!project.tech_stack.is_empty(), "{}", project.id);
        }
    }
}
