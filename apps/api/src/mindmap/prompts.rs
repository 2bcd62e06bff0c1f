// LLM prompt templates for the mind map routes.
// Shared fragments come from llm_client::prompts.

/// Mind map generation prompt.
/// Replace: {profile}, {concise_labels}
pub const MIND_MAP_PROMPT_TEMPLATE: &str = r#"Create a career mind map for the person described below.

PROFILE:
{profile}

Return a JSON object with this EXACT shape:
{
  "nodes": [
    {"id": "root", "data": {"label": "Career Paths"}},
    {"id": "1", "data": {"label": "Software Developer"}},
    {"id": "1-1", "data": {"label": "Senior Developer"}}
  ],
  "edges": [
    {"source": "root", "target": "1"},
    {"source": "1", "target": "1-1"}
  ]
}

RULES:
1. Exactly one root node with id "root"
2. Between 4 and 6 career nodes directly under the root, each a realistic job title that fits the profile
3. One or two progression nodes under each career node (the next role up)
4. Every edge must reference node ids that exist
5. {concise_labels}"#;

/// Node expansion prompt.
/// Replace: {label}, {context}, {concise_labels}
pub const EXPAND_NODE_PROMPT_TEMPLATE: &str = r#"A user is exploring a career mind map and wants to expand the node "{label}".

Additional context about the user:
{context}

Return a JSON ARRAY of 3 to 5 career options that naturally follow from "{label}" (specialisations, promotions, or adjacent roles):
[
  {"label": "Staff Engineer"},
  {"label": "Engineering Manager"}
]

{concise_labels}"#;
