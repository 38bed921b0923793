pub(crate) const FALLBACK_REASON: &str = "Basic compatibility with your profile";
const MAX_CLAUSES: usize = 2;

/// Sub-scores feeding the explanation, in clause precedence order.
pub(crate) struct ReasonInputs<'a> {
    pub skills: f64,
    pub sector: f64,
    pub sector_label: &'a str,
    pub location: f64,
    pub education: f64,
}

pub(crate) fn explain(inputs: &ReasonInputs<'_>) -> String {
    let mut clauses = Vec::with_capacity(4);

    if inputs.skills > 70.0 {
        clauses.push(format!("Strong skills match ({}%)", inputs.skills.round()));
    } else if inputs.skills > 40.0 {
        clauses.push(format!("Good skills alignment ({}%)", inputs.skills.round()));
    }

    if inputs.sector > 0.0 {
        clauses.push(format!("Matches your interest in {}", inputs.sector_label));
    }

    if inputs.location > 80.0 {
        clauses.push("Perfect location match".to_string());
    } else if inputs.location > 40.0 {
        clauses.push("Good location fit".to_string());
    }

    if inputs.education > 80.0 {
        clauses.push("Education level perfectly matches requirements".to_string());
    }

    if clauses.is_empty() {
        return FALLBACK_REASON.to_string();
    }

    clauses.truncate(MAX_CLAUSES);
    clauses.join(". ")
}
