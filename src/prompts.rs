//! Prompt builders for the three generation kinds

use crate::mindmap::ChartType;

/// Marker appended when document text was cut
pub const TRUNCATION_MARKER: &str = "...(content continues)";

/// Cut `text` to at most `max_chars` characters, on a char boundary.
/// Returns the kept prefix and whether anything was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}

pub fn mind_map_prompt(topic: &str, chart_type: ChartType) -> String {
    format!(
        r#"Create a comprehensive and detailed mind map for the topic: "{topic}"
Chart Type: {chart}

Generate a response in the following JSON format:
{{
  "title": "Comprehensive title for the mind map",
  "chartType": "{chart}",
  "nodes": [
    {{
      "id": "1",
      "text": "Central topic (level 0)",
      "level": 0,
      "description": "Detailed description of the central topic with comprehensive information"
    }},
    {{
      "id": "2",
      "text": "Main branch 1 (level 1)",
      "level": 1,
      "parentId": "1",
      "description": "Detailed description with specific information, examples, and context"
    }}
  ]
}}

Requirements:
- Create a {chart} structure with 1 central node (level 0)
- Add 6-8 main branches (level 1) with comprehensive topics
- Include 2-3 sub-branches for each main branch (level 2)
- Each node should have detailed, educational descriptions (50-100 words each)
- Include specific examples, applications, and real-world context
- Every node except the central one must have a parentId referencing an existing node id
- All ids must be unique strings
- Total nodes should be 15-25 for comprehensive coverage
- Respond with the JSON object only"#,
        topic = topic,
        chart = chart_type,
    )
}

pub fn document_prompt(
    file_name: &str,
    content: &str,
    chart_type: ChartType,
    max_chars: usize,
) -> String {
    let (kept, truncated) = truncate_chars(content, max_chars);
    let marker = if truncated { TRUNCATION_MARKER } else { "" };

    format!(
        r#"Analyze the following document and create a comprehensive mind map:

File Name: {file_name}
Chart Type: {chart}
Document Content: {kept}{marker}

Generate a response in the following JSON format:
{{
  "title": "Mind map title based on document analysis",
  "chartType": "{chart}",
  "nodes": [
    {{
      "id": "1",
      "text": "Main topic from document (level 0)",
      "level": 0,
      "description": "Comprehensive summary of the document's main theme"
    }},
    {{
      "id": "2",
      "text": "Key section/concept (level 1)",
      "level": 1,
      "parentId": "1",
      "description": "Detailed information extracted from the document"
    }}
  ]
}}

Requirements:
- Extract key concepts, main ideas, and important details from the document
- Create a {chart} structure representing the document
- Include 1 central node representing the main topic
- Add 6-10 main branches for key sections/concepts
- Include sub-branches for important details and examples
- Provide descriptions based on actual document content
- Every node except the central one must have a parentId referencing an existing node id
- Total nodes should be 15-30 based on document complexity
- Respond with the JSON object only"#,
        file_name = file_name,
        chart = chart_type,
        kept = kept,
        marker = marker,
    )
}

pub fn node_details_prompt(
    node_text: &str,
    parent_context: Option<&str>,
    document_context: Option<&str>,
) -> String {
    let context_info = parent_context
        .map(|p| format!(" in the context of \"{}\"", p))
        .unwrap_or_default();
    let doc_info = document_context
        .map(|d| format!("Based on the document context: {}\n", d))
        .unwrap_or_default();

    format!(
        r#"Generate comprehensive, detailed information about "{node_text}"{context_info}.
{doc_info}
Provide a detailed response in the following JSON format:
{{
  "summary": "A comprehensive 3-4 sentence summary explaining this topic in detail",
  "keyPoints": ["7-10 detailed key points about this topic with specific information"],
  "detailedInfo": {{
    "definition": "Clear, comprehensive definition with technical details",
    "applications": ["5-7 specific real-world applications with examples"],
    "benefits": ["5-7 detailed benefits with explanations"],
    "challenges": ["4-6 specific challenges with solutions"],
    "examples": ["5-7 concrete examples with detailed explanations"],
    "relatedConcepts": ["5-7 related concepts with brief explanations"]
  }},
  "learningPath": {{
    "prerequisites": ["3-5 specific prerequisites with explanations"],
    "nextSteps": ["5-7 detailed next steps for deeper learning"],
    "timeEstimate": "Realistic time estimate with breakdown",
    "difficulty": "Beginner, Intermediate, or Advanced",
    "resources": ["3-5 recommended learning resources"]
  }},
  "practicalInfo": {{
    "howToImplement": ["4-6 practical implementation steps"],
    "commonMistakes": ["3-5 common mistakes to avoid"],
    "bestPractices": ["4-6 industry best practices"],
    "tools": ["3-5 relevant tools or technologies"]
  }}
}}

Requirements:
- Provide in-depth, educational content with specific examples
- "difficulty" must be exactly one of Beginner, Intermediate, Advanced
- Respond with the JSON object only"#,
        node_text = node_text,
        context_info = context_info,
        doc_info = doc_info,
    )
}
