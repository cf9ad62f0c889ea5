//! Deterministic fallback content
//!
//! Used whenever the AI adapter cannot produce a result. Every function here
//! is pure and infallible: the output depends only on the input string and
//! always satisfies the tree invariants checked by [`MindMap::validate`].

use std::path::Path;

use crate::mindmap::{ChartType, MindMap, MindMapNode};
use crate::types::{DetailedInfo, Difficulty, LearningPath, NodeDetails, PracticalInfo};

/// Words of the prompt used as the topic label
const TOPIC_WORDS: usize = 3;

/// (id, parent id, label, description) of the prompt-mode branches
const PROMPT_BRANCHES: &[(&str, &str, &str, &str)] = &[
    ("2", "1", "Core Concepts & Fundamentals", "Essential building blocks and theoretical foundations that provide the groundwork for deeper understanding. Includes definitions, principles, and basic terminology."),
    ("3", "1", "Practical Applications", "Real-world implementations and use cases demonstrating how theoretical knowledge translates into practical solutions and everyday applications."),
    ("4", "1", "Advanced Techniques", "Sophisticated methods and cutting-edge approaches that represent the current state of the art in this field, including emerging trends and innovations."),
    ("5", "1", "Tools & Technologies", "Essential software, hardware, and methodological tools that professionals use to implement and work with these concepts effectively."),
    ("6", "1", "Best Practices & Standards", "Industry-accepted guidelines, methodologies, and quality standards that ensure optimal results and professional-grade implementations."),
    ("7", "1", "Common Challenges", "Typical obstacles, pitfalls, and difficulties encountered when working in this area, along with proven strategies for overcoming them."),
];

const PROMPT_SUB_BRANCHES: &[(&str, &str, &str, &str)] = &[
    ("8", "2", "Theoretical Framework", "Underlying scientific and theoretical principles that explain why and how these concepts work, providing intellectual foundation."),
    ("9", "2", "Key Terminology", "Essential vocabulary and definitions that professionals must understand to communicate effectively in this field."),
    ("10", "3", "Industry Applications", "Specific ways different industries and sectors utilize these concepts to solve problems and create value."),
    ("11", "3", "Case Studies", "Detailed examples of successful implementations, including lessons learned and measurable outcomes achieved."),
    ("12", "4", "Emerging Trends", "Latest developments and future directions that are shaping the evolution of this field and creating new opportunities."),
    ("13", "4", "Expert Techniques", "Advanced methodologies used by leading practitioners to achieve superior results and maintain competitive advantages."),
];

const DOCUMENT_BRANCHES: &[(&str, &str, &str, &str)] = &[
    ("2", "1", "Document Overview", "High-level summary of the document's purpose, scope, and main objectives as identified through content analysis."),
    ("3", "1", "Key Concepts", "Primary concepts and ideas that form the foundation of the document's content and message."),
    ("4", "1", "Main Topics", "Central themes and subjects discussed throughout the document, organized by importance and relevance."),
    ("5", "1", "Supporting Details", "Important supporting information, examples, and evidence that reinforce the main topics and concepts."),
    ("6", "1", "Conclusions & Insights", "Key takeaways, conclusions, and insights derived from the document's content and analysis."),
];

/// Short label from the first few words of a prompt
pub fn topic_label(prompt: &str) -> String {
    let label = prompt
        .split_whitespace()
        .take(TOPIC_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    if label.is_empty() {
        "Main Topic".to_string()
    } else {
        label
    }
}

/// File name without directory or extension
pub fn document_label(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Document".to_string())
}

/// Fallback map for a text prompt: 1 root, 6 branches, 6 sub-branches
pub fn mind_map(prompt: &str, chart_type: ChartType) -> MindMap {
    let topic = topic_label(prompt);

    let mut nodes = Vec::with_capacity(1 + PROMPT_BRANCHES.len() + PROMPT_SUB_BRANCHES.len());
    nodes.push(MindMapNode::root(
        "1",
        &topic,
        format!(
            "Central concept exploring {}. This comprehensive overview covers fundamental principles, practical applications, and advanced concepts that form the foundation of understanding this subject matter.",
            topic
        ),
    ));
    nodes.extend(
        PROMPT_BRANCHES
            .iter()
            .map(|(id, parent, text, desc)| MindMapNode::child(id, parent, 1, text, desc)),
    );
    nodes.extend(
        PROMPT_SUB_BRANCHES
            .iter()
            .map(|(id, parent, text, desc)| MindMapNode::child(id, parent, 2, text, desc)),
    );

    MindMap {
        title: format!("Comprehensive Mind Map: {}", topic),
        chart_type,
        nodes,
    }
}

/// Fallback map for an uploaded document: 1 root, 5 flat branches
pub fn document_mind_map(file_name: &str, chart_type: ChartType) -> MindMap {
    let label = document_label(file_name);

    let mut nodes = Vec::with_capacity(1 + DOCUMENT_BRANCHES.len());
    nodes.push(MindMapNode::root(
        "1",
        &label,
        format!(
            "Comprehensive analysis of the document \"{}\". This mind map extracts and organizes the key concepts, main ideas, and important details found within the document content.",
            file_name
        ),
    ));
    nodes.extend(
        DOCUMENT_BRANCHES
            .iter()
            .map(|(id, parent, text, desc)| MindMapNode::child(id, parent, 1, text, desc)),
    );

    MindMap {
        title: format!("Analysis of {}", file_name),
        chart_type,
        nodes,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fallback detail content for a node label
pub fn node_details(node_text: &str) -> NodeDetails {
    NodeDetails {
        summary: format!(
            "{} represents a fundamental concept that plays a crucial role in its domain. This topic encompasses various aspects including theoretical foundations, practical applications, and real-world implementations. Understanding this concept is essential for anyone looking to gain comprehensive knowledge in this field.",
            node_text
        ),
        key_points: vec![
            format!("Core definition and fundamental principles of {}", node_text),
            "Historical development and evolution of the concept".to_string(),
            "Key characteristics and distinguishing features".to_string(),
            "Primary applications and use cases in various industries".to_string(),
            "Benefits and advantages of implementing this concept".to_string(),
            "Common challenges and potential solutions".to_string(),
            "Best practices and industry standards".to_string(),
            "Future trends and emerging developments".to_string(),
            "Integration with related concepts and technologies".to_string(),
            "Practical implementation strategies and methodologies".to_string(),
        ],
        detailed_info: DetailedInfo {
            definition: format!(
                "{} is a comprehensive concept that encompasses multiple dimensions of understanding and application. It represents a systematic approach to organizing, analyzing, and implementing specific methodologies within its domain.",
                node_text
            ),
            applications: strings(&[
                "Educational institutions for curriculum development and learning enhancement",
                "Corporate training programs for skill development and knowledge transfer",
                "Research and development projects for innovation and discovery",
                "Project management for planning and execution strategies",
                "Problem-solving frameworks for systematic analysis",
                "Decision-making processes for strategic planning",
                "Knowledge management systems for information organization",
            ]),
            benefits: strings(&[
                "Enhanced understanding and clarity of complex concepts",
                "Improved problem-solving capabilities and analytical thinking",
                "Better organization and structure of information",
                "Increased efficiency in learning and knowledge retention",
                "Enhanced communication and collaboration among teams",
                "Systematic approach to tackling complex challenges",
                "Improved decision-making through visual representation",
            ]),
            challenges: strings(&[
                "Initial learning curve and time investment required",
                "Complexity in handling large amounts of information",
                "Need for continuous updates and maintenance",
                "Potential oversimplification of complex relationships",
                "Difficulty in measuring effectiveness and impact",
                "Integration challenges with existing systems and processes",
            ]),
            examples: strings(&[
                "Academic research projects utilizing structured analysis methods",
                "Business strategy development using systematic frameworks",
                "Software development projects with modular design approaches",
                "Educational curriculum design with progressive learning paths",
                "Marketing campaigns with targeted audience segmentation",
                "Scientific research with hypothesis-driven methodologies",
                "Product development with user-centered design principles",
            ]),
            related_concepts: strings(&[
                "Systems thinking and holistic analysis approaches",
                "Information architecture and knowledge organization",
                "Cognitive psychology and learning theory principles",
                "Design thinking and creative problem-solving methods",
                "Data visualization and information presentation techniques",
                "Project management methodologies and frameworks",
                "Strategic planning and decision-making processes",
            ]),
        },
        learning_path: LearningPath {
            prerequisites: strings(&[
                "Basic understanding of the subject domain and terminology",
                "Familiarity with fundamental concepts and principles",
                "Basic analytical and critical thinking skills",
                "Understanding of information organization principles",
                "Awareness of problem-solving methodologies",
            ]),
            next_steps: strings(&[
                "Advanced study of specialized techniques and methodologies",
                "Practical application through hands-on projects and exercises",
                "Integration with complementary tools and technologies",
                "Development of expertise through continuous practice",
                "Exploration of emerging trends and innovations",
                "Collaboration with experts and practitioners in the field",
                "Teaching and mentoring others to reinforce understanding",
            ]),
            time_estimate: "2-4 weeks for basic understanding, 2-3 months for proficiency, ongoing for mastery".to_string(),
            difficulty: Difficulty::Intermediate,
            resources: strings(&[
                "Comprehensive textbooks and academic publications",
                "Online courses and interactive learning platforms",
                "Professional workshops and training programs",
                "Industry conferences and networking events",
                "Practical tools and software applications",
            ]),
        },
        practical_info: PracticalInfo {
            how_to_implement: strings(&[
                "Start with clear objectives and defined scope",
                "Gather and organize relevant information and resources",
                "Apply systematic methodology and structured approach",
                "Implement iterative process with continuous feedback",
                "Monitor progress and adjust strategies as needed",
                "Evaluate results and document lessons learned",
            ]),
            common_mistakes: strings(&[
                "Rushing through the process without proper planning",
                "Overlooking important details and relationships",
                "Failing to consider multiple perspectives and viewpoints",
                "Not allowing sufficient time for iteration and refinement",
                "Ignoring feedback and failing to adapt approach",
            ]),
            best_practices: strings(&[
                "Maintain clear documentation and version control",
                "Involve stakeholders throughout the process",
                "Use proven methodologies and established frameworks",
                "Implement quality assurance and validation procedures",
                "Foster collaboration and knowledge sharing",
                "Continuously update and improve based on experience",
            ]),
            tools: strings(&[
                "Specialized software applications and platforms",
                "Collaborative tools for team coordination",
                "Analytics and measurement instruments",
                "Documentation and knowledge management systems",
                "Communication and presentation tools",
            ]),
        },
    }
}
