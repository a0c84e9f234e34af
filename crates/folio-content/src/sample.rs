//! Built-in fallback projects.

use folio_model::{Project, ProjectLinks};

/// The fixed two-element sample project list.
///
/// Shown whenever the projects resource cannot be loaded or comes back
/// empty, so the gallery never renders an empty grid purely from a network
/// failure.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "sample-1".to_string(),
            title: "Sample Project 1".to_string(),
            description: "This is a sample project description. It shows when the \
                          projects resource cannot be loaded."
                .to_string(),
            image: "/img/projects/placeholder.jpg".to_string(),
            categories: vec!["web".to_string(), "frontend".to_string()],
            tags: vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "JavaScript".to_string(),
            ],
            links: ProjectLinks {
                demo: Some("#".to_string()),
                code: Some("#".to_string()),
            },
            features: vec![
                "Responsive design".to_string(),
                "Modern UI/UX".to_string(),
                "Cross-browser compatibility".to_string(),
                "Performance optimized".to_string(),
            ],
            featured: true,
        },
        Project {
            id: "sample-2".to_string(),
            title: "Sample Project 2".to_string(),
            description: "Another sample project to demonstrate the portfolio layout \
                          and functionality."
                .to_string(),
            image: "/img/projects/placeholder.jpg".to_string(),
            categories: vec!["mobile".to_string(), "backend".to_string()],
            tags: vec![
                "React Native".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            links: ProjectLinks {
                demo: Some("#".to_string()),
                code: Some("#".to_string()),
            },
            features: vec![
                "Mobile-first approach".to_string(),
                "RESTful API".to_string(),
                "User authentication".to_string(),
                "Real-time updates".to_string(),
            ],
            featured: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_list_has_exactly_two_projects() {
        let samples = sample_projects();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].id, "sample-1");
        assert_eq!(samples[1].id, "sample-2");
        assert!(samples[0].featured);
        assert!(!samples[1].featured);
    }
}
