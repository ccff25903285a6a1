//! The project table compiled into the site.
//!
//! Order here is the order on the home page. To take a project off the page,
//! call `.hidden()` on it instead of deleting the entry.

use crate::record::{Category, ProjectRecord};

/// The built-in project records, in display order.
pub fn projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            "market-data-service",
            "Market Data Service",
            Category::Personal,
        )
        .with_description(
            "This FastAPI-based market data service asynchronously fetches, persists, and \
             publishes real-time and historical market data from multiple providers, while \
             also offering analytical capabilities like moving average calculations.",
        )
        .with_image("/images/marketdatasystem.jpg")
        .with_href("https://github.com/hhtzuhh/price-pipeline")
        .with_technologies(["FastAPI", "PostgreSQL", "Redis", "Docker", "Kafka"])
        .with_repo("hhtzuhh", "price-pipeline"),
        ProjectRecord::new("cliphunt", "ClipHunt Agent", Category::Personal)
            .with_description(
                "A multi-agent system that streamlines viral video production. It generates \
                 trending video ideas, writes scripts, and automates the discovery and \
                 extraction of relevant clips from YouTube.",
            )
            .with_image("/images/cliphunt.png")
            .with_href("https://github.com/catmei/jaegers.ai")
            .with_technologies(["Python", "FastAPI", "LangGraph", "Gemini", "LangChain"])
            .with_repo("hhtzuhh", "cliphunt"),
        ProjectRecord::new(
            "breast-ultrasound-segmentation",
            "Breast Ultrasound Segmentation",
            Category::Academic,
        )
        .with_description(
            "Novel weakly supervised learning framework for breast ultrasound image \
             segmentation, accepted by IEEE EMBC 2024.",
        )
        .with_image("/images/breastcancer.png")
        .with_href("https://ieeexplore.ieee.org/document/10781719")
        .with_technologies(["Pytorch", "Deep Learning"])
        .with_repo("tzuhan2424", "breast-ultrasound-segmentation")
        .with_external_link("https://ieeexplore.ieee.org/document/10781719"),
        ProjectRecord::new("tidetrack", "TideTrack", Category::Personal)
            .with_description(
                "TideTrack is a machine learning-powered system that both monitors and \
                 forecasts the severity of harmful Karenia brevis algae blooms in the Gulf of \
                 Mexico, providing critical data to help fisheries and scientists mitigate \
                 economic losses and optimize fieldwork.",
            )
            .with_image("/images/tidetrack.png")
            .with_href("/projects/tidetrack")
            .with_technologies(["Python", "React", "Machine Learning"])
            .with_repo("tzuhan2424", "kean-capstone"),
    ]
}
