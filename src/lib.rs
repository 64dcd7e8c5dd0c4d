pub use ox_forms::*;
pub use ox_forms_std_renderers::{
    register_standard_renderers, render_checkbox, render_datepicker, render_icon, render_input,
    render_radio, render_select, render_textarea, standard_registry,
};
pub use ox_forms_tera::{register_form_tags, render_process_steps, FormTagOptions};
