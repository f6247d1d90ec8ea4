//! Integration tests for featgen-core.
//!
//! Everything here is pure: naming, planning and config registration.
//! Pipeline tests against real adapters live in `featgen-adapters/tests`.

use std::path::Path;

use featgen_core::{
    application::TemplateService,
    domain::{
        ConfigDocument, FeatureLayout, FeatureName, Registration, ScaffoldPlan, TemplateRole,
        register_feature,
    },
};

const SAMPLE_INPUTS: &[&str] = &[
    "cart",
    "Order History",
    "orderHistory",
    "OrderHistory",
    "user_profile",
    "user profile",
    "A B C",
    "foo_Bar",
    "  padded  ",
    "x",
];

const EXISTING_CONFIG: &str = "\
index_generator:
  page_width: 80
  exclude:
    - '**.g.dart'
  libraries:
    - directory_path: lib/src/core
      file_name: core
\n\n";

#[test]
fn snake_case_never_has_uppercase_or_spaces() {
    for input in SAMPLE_INPUTS {
        let snake = FeatureName::new(*input).snake_case().to_owned();
        assert!(
            !snake.chars().any(|c| c.is_uppercase() || c == ' '),
            "{input:?} produced {snake:?}"
        );
    }
}

#[test]
fn pascal_case_matches_capitalized_snake_words() {
    for input in ["user profile", "order history", "cart", "user_profile", "a_b c"] {
        let name = FeatureName::new(input);
        let rebuilt: String = name
            .snake_case()
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                chars
                    .next()
                    .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                    .unwrap_or_default()
            })
            .collect();
        assert_eq!(name.pascal_case(), rebuilt, "input {input:?}");
    }
}

#[test]
fn plans_are_deterministic() {
    for input in SAMPLE_INPUTS {
        let a = ScaffoldPlan::build(&FeatureName::new(*input));
        let b = ScaffoldPlan::build(&FeatureName::new(*input));
        assert_eq!(a, b, "plan for {input:?} differs between calls");
    }
}

#[test]
fn registration_is_idempotent() {
    let name = FeatureName::new("Order History");
    let base = FeatureLayout::default().base_path;
    let original = ConfigDocument::new(EXISTING_CONFIG);

    let Registration::Updated(first) = register_feature(&original, &name, &base) else {
        panic!("first registration should append a block");
    };
    let second = register_feature(&first, &name, &base);
    assert_eq!(second, Registration::Unchanged);

    let after_second = match second {
        Registration::Updated(doc) => doc,
        Registration::Unchanged => first.clone(),
    };
    assert_eq!(after_second.len(), first.len());
}

#[test]
fn registration_appends_one_block_after_original_prefix() {
    let name = FeatureName::new("Order History");
    let base = FeatureLayout::default().base_path;
    let original = ConfigDocument::new(EXISTING_CONFIG);

    let Registration::Updated(updated) = register_feature(&original, &name, &base) else {
        panic!("expected an appended block");
    };

    assert!(updated.as_str().starts_with(EXISTING_CONFIG.trim_end()));
    assert_eq!(updated.as_str().matches("# FEATURE : ORDER_HISTORY").count(), 1);
    assert_eq!(updated.as_str().matches("# FEATURE").count(), 1);
}

#[test]
fn order_history_end_to_end_plan() {
    let name = FeatureName::new("Order History");
    assert_eq!(name.snake_case(), "order_history");
    assert_eq!(name.pascal_case(), "OrderHistory");

    let plan = ScaffoldPlan::build(&name);
    let entity = plan
        .file(Path::new(
            "lib/src/features/order_history/domain/entities/order_history_entity.dart",
        ))
        .expect("entity file is planned");

    assert_eq!(entity.role, TemplateRole::Entity);
    assert!(entity.content.contains("OrderHistoryEntity"));
}

#[test]
fn plan_covers_catalog_and_mirrored_test_tree() {
    let name = FeatureName::new("cart");
    let plan = ScaffoldPlan::build(&name);

    assert_eq!(plan.files().len(), TemplateService::new().list().len());
    assert!(
        plan.directories()
            .contains(&Path::new("test/src/features/cart/presentation/widgets").to_path_buf())
    );
    assert!(
        plan.files()
            .iter()
            .all(|f| f.path.starts_with("lib/src/features/cart"))
    );
    assert!(plan.file(Path::new("lib/src/features/cart/cart.dart")).is_some());
}

#[test]
fn part_files_point_at_the_bloc() {
    let plan = ScaffoldPlan::build(&FeatureName::new("cart"));
    for role in [TemplateRole::Event, TemplateRole::State] {
        let file = plan.file_for(role).expect("part file planned");
        assert!(file.content.starts_with("part of 'cart_bloc.dart';"));
    }
    let bloc = plan.file_for(TemplateRole::Bloc).expect("bloc planned");
    assert!(bloc.content.contains("part 'cart_event.dart';"));
    assert!(bloc.content.contains("part 'cart_state.dart';"));
}

#[test]
fn custom_layout_moves_plan_and_registration() {
    let name = FeatureName::new("cart");
    let layout = FeatureLayout::new("lib/features/", "test/features");
    let plan = ScaffoldPlan::build_with_layout(&name, &layout);

    assert!(plan.validate().is_ok());
    assert!(
        plan.files()
            .iter()
            .all(|f| f.path.starts_with("lib/features/cart"))
    );

    let doc = ConfigDocument::new("index_generator:\n  libraries:\n");
    let Registration::Updated(updated) = register_feature(&doc, &name, &layout.base_path) else {
        panic!("expected an appended block");
    };
    assert!(updated.contains_marker(&layout.registration_marker(&name)));
}
