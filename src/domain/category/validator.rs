//! Validation rules for the Category aggregate.

use crate::domain::foundation::{FieldKind, FieldRules, Rule, RuleValidator};

/// Maximum length for category name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for category description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

const CATEGORY_RULES: &[FieldRules] = &[
    FieldRules::new(
        "name",
        &[
            Rule::Required,
            Rule::Kind(FieldKind::Text),
            Rule::MaxLength(MAX_NAME_LENGTH),
        ],
    ),
    FieldRules::new(
        "description",
        &[
            Rule::Kind(FieldKind::Text),
            Rule::MaxLength(MAX_DESCRIPTION_LENGTH),
        ],
    ),
    FieldRules::new("is_active", &[Rule::Required, Rule::Kind(FieldKind::Bool)]),
    FieldRules::new("created_at", &[Rule::Required, Rule::Kind(FieldKind::Time)]),
];

/// Rule interpreter loaded with the Category table.
pub const CATEGORY_VALIDATOR: RuleValidator = RuleValidator::new(CATEGORY_RULES);
