#![no_main]
use libfuzzer_sys::fuzz_target;
use ox_forms::{FormDefinition, FormEngine, WidgetDefinition};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<WidgetDefinition>(s);

        // Whatever parses must render or fail cleanly.
        if let Ok(form) = FormDefinition::from_yaml_str(s) {
            let registry = ox_forms_std_renderers::standard_registry();
            let _ = FormEngine::new(&registry).render(&form);
        }
    }
});
