use ox_forms::{FieldOptions, FormDefinition, FormEngine, InputConfig, ProcessSteps, SelectConfig, WidgetDefinition};
use ox_forms_tera::{register_form_tags, render_process_steps, FormTagOptions};
use tera::{Context, Tera};

fn main() -> anyhow::Result<()> {
    // 1. Render a form definition directly
    let registry = ox_forms_std_renderers::standard_registry();
    let form = FormDefinition {
        id: "login_form".to_string(),
        title: Some("Login".to_string()),
        fields: vec![
            WidgetDefinition::Input(InputConfig::from(FieldOptions {
                icon: Some("fa-user".to_string()),
                required: true,
                ..FieldOptions::new("Username", "login.username")
            })),
            WidgetDefinition::Select(SelectConfig {
                lookuplist: Some("['admin', 'staff']".to_string()),
                ..SelectConfig::new("Role", "login.role")
            }),
        ],
        ..Default::default()
    };

    println!("Rendering Form...");
    let html = FormEngine::new(&registry).render(&form)?;
    println!("--- Rendered Output ---");
    println!("{}", html);
    println!("-----------------------");

    // 2. Same widgets from a template
    let mut tera = Tera::default();
    register_form_tags(&mut tera, FormTagOptions { form_name: Some("login_form".to_string()) })?;
    tera.add_raw_template(
        "login.html",
        r#"{{ input(label="Username", model="login.username", icon="fa-user", required=true) }}
{{ checkbox(label="Remember me", model="login.remember") }}"#,
    )?;
    println!("{}", tera.render("login.html", &Context::new())?);

    // 3. Progress indicator
    let steps = ProcessSteps { process_steps: 3, active: true, show_titles: true, ..Default::default() };
    println!("{}", render_process_steps(&tera, &steps)?);

    Ok(())
}
