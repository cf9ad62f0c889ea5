//! Static FAQ and use-case content

use crate::types::{Faq, UseCase};

pub const FAQS: &[Faq] = &[
    Faq {
        id: 1,
        question: "What is an AI-powered mind map generator?",
        answer: "An AI-powered mind map generator is an intelligent tool that uses artificial intelligence to automatically create visual representations of information, concepts, and ideas. It analyzes your input (text prompts or uploaded documents) and generates structured, hierarchical diagrams that help organize and understand complex topics.",
    },
    Faq {
        id: 2,
        question: "How does the AI analyze my documents?",
        answer: "Our AI system reads and processes your uploaded documents using natural language processing. It identifies key concepts, relationships, and themes within the content, then organizes this information into a logical mind map structure with detailed descriptions for each node.",
    },
    Faq {
        id: 3,
        question: "What file formats are supported?",
        answer: "Uploads are read as plain text, so text-based formats such as TXT and Markdown work best. Files up to 10 MB are accepted.",
    },
    Faq {
        id: 4,
        question: "Can I customize the chart types?",
        answer: "Yes! We offer 8 different chart types including Hierarchical Tree, Radial Map, Flowchart, Network Diagram, Timeline Chart, Concept Map, Organizational Chart, and Circular Diagram. Each type is optimized for different kinds of information and use cases.",
    },
    Faq {
        id: 5,
        question: "How detailed is the information generated for each node?",
        answer: "Each node contains comprehensive information including definitions, real-world applications, benefits, challenges, examples, learning paths, implementation guides, and best practices.",
    },
    Faq {
        id: 6,
        question: "Is my data secure and private?",
        answer: "Uploaded files are processed temporarily and deleted as soon as the mind map has been generated. Nothing you send is stored on the server.",
    },
    Faq {
        id: 7,
        question: "Can I export or save my mind maps?",
        answer: "Currently, you can view and interact with your mind maps in the browser. Export functionality for various formats (PDF, PNG, SVG) is planned for future updates.",
    },
    Faq {
        id: 8,
        question: "What makes this different from traditional mind mapping tools?",
        answer: "Unlike traditional tools that require manual creation, the generator builds complete mind maps with detailed, educational content for you. It saves time and helps make sure no important concept is overlooked.",
    },
];

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        id: 1,
        title: "Academic Research & Study",
        description: "Transform research papers, textbooks, and academic materials into structured mind maps for better understanding and retention.",
        icon: "📚",
        benefits: &[
            "Improved comprehension of complex topics",
            "Better retention of academic material",
            "Structured approach to research analysis",
            "Visual organization of literature reviews",
        ],
    },
    UseCase {
        id: 2,
        title: "Business Strategy & Planning",
        description: "Convert business documents, reports, and strategic plans into visual frameworks for better decision-making.",
        icon: "💼",
        benefits: &[
            "Clear visualization of business strategies",
            "Enhanced team collaboration and alignment",
            "Improved strategic planning processes",
            "Better communication of complex business concepts",
        ],
    },
    UseCase {
        id: 3,
        title: "Project Management",
        description: "Break down project requirements, specifications, and documentation into manageable, visual components.",
        icon: "📋",
        benefits: &[
            "Better project scope understanding",
            "Improved task organization and prioritization",
            "Enhanced team coordination",
            "Clear visualization of project dependencies",
        ],
    },
    UseCase {
        id: 4,
        title: "Educational Content Creation",
        description: "Transform educational materials into engaging, visual learning resources for students and trainees.",
        icon: "🎓",
        benefits: &[
            "Enhanced student engagement and understanding",
            "Improved knowledge retention rates",
            "Structured curriculum development",
            "Visual learning support for different learning styles",
        ],
    },
    UseCase {
        id: 5,
        title: "Technical Documentation",
        description: "Convert technical manuals, API documentation, and system specifications into accessible visual guides.",
        icon: "⚙️",
        benefits: &[
            "Simplified technical concept explanation",
            "Better developer onboarding processes",
            "Improved documentation accessibility",
            "Enhanced system architecture understanding",
        ],
    },
    UseCase {
        id: 6,
        title: "Knowledge Management",
        description: "Organize and structure organizational knowledge, procedures, and best practices for easy access and understanding.",
        icon: "🧠",
        benefits: &[
            "Centralized knowledge organization",
            "Improved knowledge transfer processes",
            "Better institutional memory preservation",
            "Enhanced employee training and development",
        ],
    },
    UseCase {
        id: 7,
        title: "Creative Brainstorming",
        description: "Generate comprehensive mind maps from initial ideas to explore all aspects and possibilities of creative projects.",
        icon: "💡",
        benefits: &[
            "Enhanced creative thinking processes",
            "Comprehensive idea exploration",
            "Better project conceptualization",
            "Improved innovation and ideation",
        ],
    },
    UseCase {
        id: 8,
        title: "Meeting & Workshop Planning",
        description: "Transform meeting agendas, workshop materials, and discussion topics into structured visual frameworks.",
        icon: "🤝",
        benefits: &[
            "Better meeting preparation and structure",
            "Enhanced participant engagement",
            "Improved discussion flow and focus",
            "Clear action item identification and tracking",
        ],
    },
];
