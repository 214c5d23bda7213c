//! The curator prompt, rendered with minijinja.

use minijinja::{Environment, context};
use serde::Serialize;

use snapp_core::curator::UserInputs;
use snapp_core::persona::PersonaCatalog;
use snapp_core::{Result, SnappError, TraitVector};

const TEMPLATE_NAME: &str = "curator_prompt.txt";

const CURATOR_PROMPT: &str = r#"
You are **The Curator**, the AI engine of **FlightSnapp**, a personality-driven vacation booking app using Big Five psychology, spontaneous curation, and gamified group rewards.

Your task: **Output ONLY a complete, structured JSON** representing:
1. Full Quiz Flow (10 core + follow-ups + modifiers)
2. Persona Assignment (1 of {{ personas | length }} from the official catalog)
3. 3–5 Curated Vacation Packages
4. Snapp Squad Group Tiers
5. Shareables (viral hooks)
6. Booking Session Stubs

**NEVER output markdown, prose, or explanations. JSON ONLY.**

**{{ personas | length }} PERSONAS CATALOG**
{% for p in personas -%}
{{ loop.index }}. {{ p.name }} (O: {{ p.weights.O }}, C: {{ p.weights.C }}, E: {{ p.weights.E }}, A: {{ p.weights.A }}, N: {{ p.weights.N }})
{% endfor %}
**INPUTS**
```json
{{ inputs_json }}
```

Now generate the JSON.
"#;

#[derive(Serialize)]
struct PromptPersona<'a> {
    name: &'a str,
    weights: &'a TraitVector,
}

/// Renders curator prompts against a fixed persona catalog.
pub struct PromptBuilder {
    env: Environment<'static>,
}

impl PromptBuilder {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, CURATOR_PROMPT)
            .map_err(|e| SnappError::internal(format!("curator prompt template: {e}")))?;
        Ok(Self { env })
    }

    /// The prompt for `inputs`: the numbered persona catalog followed by the
    /// inputs as pretty-printed JSON.
    pub fn build(&self, personas: &PersonaCatalog, inputs: &UserInputs) -> Result<String> {
        let inputs_json = serde_json::to_string_pretty(inputs)?;
        let personas: Vec<PromptPersona<'_>> = personas
            .personas()
            .iter()
            .map(|p| PromptPersona {
                name: &p.name,
                weights: &p.weights,
            })
            .collect();

        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| SnappError::internal(format!("curator prompt template: {e}")))?;
        template
            .render(context! { personas => personas, inputs_json => inputs_json })
            .map_err(|e| SnappError::internal(format!("failed to render curator prompt: {e}")))
    }
}
