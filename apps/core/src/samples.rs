//! Built-in sample documents for trying the analyzer without a file.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    ResearchPaper,
    BusinessReport,
    TechnicalGuide,
}

impl Sample {
    pub const ALL: [Sample; 3] = [
        Sample::ResearchPaper,
        Sample::BusinessReport,
        Sample::TechnicalGuide,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Sample::ResearchPaper => "Research Paper",
            Sample::BusinessReport => "Business Report",
            Sample::TechnicalGuide => "Technical Guide",
        }
    }

    /// File name used for exports, e.g. `research_paper.txt`
    pub fn filename(&self) -> String {
        format!("{}.txt", self.title().to_lowercase().replace(' ', "_"))
    }

    pub fn text(&self) -> &'static str {
        match self {
            Sample::ResearchPaper => "Abstract: Machine learning applications in healthcare have shown remarkable progress in recent years. This study examines the implementation of deep learning algorithms for medical image analysis. Introduction: Artificial intelligence is revolutionizing healthcare diagnostics. Our methodology involves convolutional neural networks trained on medical imaging datasets. Results indicate 95% accuracy in tumor detection. Conclusion: AI-powered diagnostic tools show great promise for improving patient outcomes.",
            Sample::BusinessReport => "Executive Summary: Q3 financial results show strong growth across all business segments. Revenue increased 18% year-over-year to $2.4 billion, driven by digital transformation initiatives. Market expansion in Asia-Pacific region contributed 25% of total growth. Strategic recommendations include investing in cloud infrastructure and expanding our e-commerce platform. Customer satisfaction scores improved to 89%, reflecting our commitment to service excellence.",
            Sample::TechnicalGuide => "Installation Instructions: This guide covers the setup process for our new software platform. System Requirements: Windows 10 or macOS 10.15+, 8GB RAM minimum, 20GB available storage. Step 1: Download the installer from our official website. Step 2: Run the installer with administrator privileges. Step 3: Configure database connections and API endpoints. Troubleshooting: Common issues include firewall blocking port 8080 and insufficient disk space.",
        }
    }
}
