use super::*;
use std::error::Error as _;

fn tera_with_tags(options: FormTagOptions) -> Tera {
    let mut tera = Tera::default();
    register_form_tags(&mut tera, options).unwrap();
    tera
}

fn render(tera: &mut Tera, source: &str) -> tera::Result<String> {
    tera.add_raw_template("page.html", source)?;
    tera.render("page.html", &Context::new())
}

/// Full message chain of a tera error, which nests the function error under the render error.
fn error_chain(err: &tera::Error) -> String {
    let mut messages = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        messages.push(inner.to_string());
        source = inner.source();
    }
    messages.join(" | ")
}

#[test]
fn test_widget_tags_render_unescaped() {
    let mut tera = tera_with_tags(FormTagOptions::default());
    let html = render(
        &mut tera,
        r#"{{ input(label="Name", model="user.name", hide="vm.hidden") }}{{ icon(name="fa-eye") }}"#,
    )
    .unwrap();

    assert!(html.contains(r#"ng-model="user.name""#));
    assert!(html.contains(r#"ng-hide="vm.hidden""#));
    assert!(html.contains(r#"<i class="fa fa-eye"></i>"#));
    assert!(!html.contains("&lt;"));
}

#[test]
fn test_every_widget_is_registered() {
    let mut tera = tera_with_tags(FormTagOptions::default());
    let html = render(
        &mut tera,
        r#"{{ textarea(label="T", model="t") }}
{{ select(label="S", model="s", lookuplist="vm.items") }}
{{ checkbox(label="C", model="c") }}
{{ radio(label="R", model="r", value="1") }}
{{ datepicker(label="D", model="d", mindate="2020-01-01") }}"#,
    )
    .unwrap();

    for model in ["t", "s", "c", "r", "d"] {
        assert!(html.contains(&format!(r#"ng-model="{}""#, model)), "missing {}", model);
    }
    assert!(html.contains(r#"ng-options="option for option in vm.items""#));
    assert!(html.contains(r#" data-min-date="2020-01-01""#));
    assert!(!html.contains(r#" min-date="#));
}

#[test]
fn test_required_without_scope_fails() {
    let mut tera = tera_with_tags(FormTagOptions::default());
    let err = render(&mut tera, r#"{{ input(label="A", model="a", required=true) }}"#).unwrap_err();
    assert!(error_chain(&err).contains("invalid configuration"), "{}", error_chain(&err));
}

#[test]
fn test_required_with_registered_scope() {
    let mut tera = tera_with_tags(FormTagOptions {
        form_name: Some("signup".to_string()),
    });
    let html = render(&mut tera, r#"{{ select(label="A", model="a", required=true) }}"#).unwrap();
    assert!(html.contains("signup.a.$error.required"));
}

#[test]
fn test_required_with_form_argument() {
    let mut tera = tera_with_tags(FormTagOptions::default());
    let html = render(
        &mut tera,
        r#"{{ input(label="A", model="a", required=true, form="inline") }}"#,
    )
    .unwrap();
    assert!(html.contains("inline.a.$error.required"));
}

#[test]
fn test_missing_model_is_an_error() {
    let mut tera = tera_with_tags(FormTagOptions::default());
    let err = render(&mut tera, r#"{{ input(label="A") }}"#).unwrap_err();
    assert!(error_chain(&err).contains("invalid arguments"), "{}", error_chain(&err));
}

#[test]
fn test_misspelled_argument_is_an_error() {
    let mut tera = tera_with_tags(FormTagOptions {
        form_name: Some("signup".to_string()),
    });
    let err = render(&mut tera, r#"{{ input(label="A", model="a", requried=true) }}"#).unwrap_err();
    let chain = error_chain(&err);
    assert!(chain.contains("input: unknown argument 'requried'"), "{}", chain);
}

#[test]
fn test_argument_of_other_widget_is_rejected() {
    let mut tera = tera_with_tags(FormTagOptions::default());
    let err = render(&mut tera, r#"{{ icon(name="fa-eye", label="Eye") }}"#).unwrap_err();
    assert!(error_chain(&err).contains("icon: unknown argument 'label'"), "{}", error_chain(&err));

    let html = render(&mut tera, r#"{{ datepicker(label="D", model="d", format="dd/MM/yyyy") }}"#).unwrap();
    assert!(html.contains(r#"uib-datepicker-popup="dd/MM/yyyy""#));
}

#[test]
fn test_process_steps_function() {
    let mut tera = tera_with_tags(FormTagOptions::default());
    let out = render(
        &mut tera,
        r#"{% set s = process_steps(process_steps=1, complete=false, disabled=false, active=true, show_titles=true) %}{{ s.process_steps }} {{ s.active }} {{ s.show_index }} {{ s.show_titles }}"#,
    )
    .unwrap();
    assert_eq!(out, "1 true false true");
}

#[test]
fn test_process_steps_template() {
    let tera = tera_with_tags(FormTagOptions::default());
    let html = render_process_steps(
        &tera,
        &ProcessSteps {
            process_steps: 3,
            active: true,
            show_titles: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert!(html.contains(r#"<div class="process-steps active">"#));
    assert_eq!(html.matches(r#"<li class="process-step">"#).count(), 3);
    assert!(html.contains("Step 3"));
    assert!(!html.contains("process-step-index"));
}
