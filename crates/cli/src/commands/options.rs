//! `postcraft options` — List the template post types and tones.

use postcraft_generator::{TemplateOptions, template_options};

pub async fn run(json: bool) -> postcraft_core::Result<()> {
    let options = template_options();

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        print!("{}", render(&options));
    }

    Ok(())
}

fn render(options: &TemplateOptions) -> String {
    let mut out = String::from("Post types:\n");
    for post_type in &options.post_types {
        out.push_str(&format!("  - {post_type}\n"));
    }
    out.push_str("Tones:\n");
    for tone in &options.tones {
        out.push_str(&format!("  - {tone}\n"));
    }
    out
}
