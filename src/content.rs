//! Static page content: the project showcase and the owner's contact details.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    /// Placeholder demo link carried with the record; never rendered.
    #[allow(dead_code)]
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    /// Profile handle without scheme, e.g. `github.com/someone`.
    pub github: &'static str,
    pub linkedin: &'static str,
}

impl PersonalInfo {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn github_url(&self) -> String {
        format!("https://{}", self.github)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }

    pub fn copyright_line(&self, year: u16) -> String {
        format!("© {year} {}. Built with Rust and Yew.", self.name)
    }
}

pub const COPYRIGHT_YEAR: u16 = 2025;

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Leonardo Nathaniel Lembono",
    bio: "Enthusiastic college student with a strong foundation in coding and problem-solving. \
          Experienced in multiple programming languages and frameworks, I enjoy collaborating on \
          projects that blend creativity, technology, and real-world impact.",
    email: "hpleonardonl@gmail.com",
    github: "github.com/leon4rd07",
    linkedin: "linkedin.com/in/leonardonl",
};

pub const PROFILE_IMAGE: &str = "/assets/profile.svg";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Space Defense – Interactive Computer Graphics Project",
        description: "This project is an interactive 3D space defense simulation built using \
                      Node.js and HTML with WebGL/Three.js for real-time rendering. The player \
                      controls a space station and must defend against incoming asteroids by \
                      maneuvering and shooting them before collision.",
        image: "/assets/space-defense.svg",
        technologies: &["HTML", "Node.js", "CSS", "Three.js"],
        live_url: "https://your-ecommerce-demo.com",
        github_url: "https://github.com/yourusername/ecommerce-platform",
        featured: true,
    },
    Project {
        id: 2,
        title: "Face Detection and Image Processing with OpenCV",
        description: "This project uses Python and OpenCV to perform real-time image processing \
                      and face detection with Haar cascades. It applies privacy filters like \
                      blurring and showcases techniques such as median blur, adaptive \
                      thresholding, and edge detection (Sobel, Prewitt, Laplacian).",
        image: "/assets/compvis.svg",
        technologies: &["Python", "OpenCV"],
        live_url: "https://your-taskapp-demo.com",
        github_url: "https://github.com/yourusername/task-management",
        featured: true,
    },
    Project {
        id: 3,
        title: "YayStock – Inventory Management System",
        description: "YayStock is a Java-based inventory management application developed with \
                      JavaFX in Eclipse. The project started by analyzing real-world stock \
                      management challenges faced by small businesses, followed by creating a \
                      business analysis report and Figma mockup to design a user-friendly \
                      interface. The final application supports features like stock tracking, \
                      warehouse and store management, transaction recording, and low-stock alerts.",
        image: "/assets/yaystock.svg",
        technologies: &["Java", "JavaFX", "MySQL"],
        live_url: "https://your-weather-demo.com",
        github_url: "https://github.com/yourusername/weather-dashboard",
        featured: false,
    },
    Project {
        id: 4,
        title: "Deep Learning Qualification Case",
        description: "Successfully developed three advanced deep learning models as part of a \
                      qualification project. A Deep Convolutional Neural Network (DCNN) was built \
                      and trained on an image dataset with preprocessing and multi-layer \
                      architecture for classification tasks. A Variational Autoencoder was \
                      implemented to reconstruct images and analyze reconstruction loss. Finally, \
                      a Self-Supervised Learning model was designed from scratch on a text \
                      dataset without relying on prebuilt models, achieving high accuracy.",
        image: "/assets/deep-learning.svg",
        technologies: &["Python", "Keras", "TensorFlow", "NumPy"],
        live_url: "https://your-portfolio.com",
        github_url: "https://github.com/yourusername/portfolio",
        featured: false,
    },
];

/// What a showcase card renders for one project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub key: String,
    pub badge: Option<&'static str>,
    pub project: Project,
}

/// One card per record, in input order.
pub fn card_views(projects: &[Project]) -> Vec<CardView> {
    projects
        .iter()
        .map(|project| CardView {
            key: format!("project-{}", project.id),
            badge: project.featured.then_some("Featured"),
            project: *project,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use url::Url;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn every_project_lists_at_least_one_technology() {
        for project in PROJECTS {
            assert!(!project.technologies.is_empty(), "{} has no tags", project.title);
        }
    }

    #[test]
    fn outbound_links_are_absolute_https_urls() {
        let mut links = vec![PERSONAL_INFO.github_url(), PERSONAL_INFO.linkedin_url()];
        links.extend(PROJECTS.iter().map(|project| project.github_url.to_string()));

        for link in links {
            let parsed = Url::parse(&link).expect("link parses");
            assert_eq!(parsed.scheme(), "https", "{link}");
            assert!(parsed.host_str().is_some(), "{link}");
        }
    }

    #[test]
    fn mailto_href_targets_the_contact_address() {
        let parsed = Url::parse(&PERSONAL_INFO.mailto_href()).expect("mailto parses");
        assert_eq!(parsed.scheme(), "mailto");
        assert_eq!(parsed.path(), PERSONAL_INFO.email);
    }

    #[test]
    fn copyright_line_names_the_owner() {
        assert_eq!(
            PERSONAL_INFO.copyright_line(2025),
            "© 2025 Leonardo Nathaniel Lembono. Built with Rust and Yew."
        );
    }

    #[test]
    fn cards_follow_input_order_without_gaps() {
        let cards = card_views(PROJECTS);
        let ids: Vec<u32> = cards.iter().map(|card| card.project.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(cards[0].key, "project-1");
        assert_eq!(cards[0].badge, Some("Featured"));
        assert_eq!(cards[2].badge, None);
    }

    #[test]
    fn reversed_input_renders_reversed() {
        let mut reversed = PROJECTS.to_vec();
        reversed.reverse();
        let titles: Vec<&str> = card_views(&reversed)
            .into_iter()
            .map(|card| card.project.title)
            .collect();
        let expected: Vec<&str> = reversed.iter().map(|project| project.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn empty_showcase_renders_no_cards() {
        assert!(card_views(&[]).is_empty());
    }

    #[test]
    fn image_references_resolve_to_bundled_assets() {
        let crate_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let images = std::iter::once(PROFILE_IMAGE).chain(PROJECTS.iter().map(|project| project.image));

        for image in images {
            let relative = image.strip_prefix("/assets/").expect("served from /assets/");
            assert!(
                crate_root.join("assets").join(relative).is_file(),
                "{image} is not bundled"
            );
        }
    }
}
