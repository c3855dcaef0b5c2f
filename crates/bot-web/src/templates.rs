use tera::Tera;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const RESULT_TEMPLATE: &str = "result.html";

/// Pages compiled into the binary. The `.html` names keep Tera's autoescaping on.
pub fn load() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (INDEX_TEMPLATE, include_str!("../templates/index.html")),
        (RESULT_TEMPLATE, include_str!("../templates/result.html")),
    ])?;
    Ok(tera)
}
