//! Template rendering with Tera

use super::View;
use crate::config::RenderFormat;
use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("page.txt", include_str!("../templates/page.txt"))?;
        tera.add_raw_template("page.html", include_str!("../templates/page.html"))?;

        Ok(Self { tera })
    }

    /// Render a view in the given format
    pub fn render(&self, view: &View, format: RenderFormat) -> Result<String> {
        let ctx = Context::from_serialize(view)?;
        Ok(self.tera.render(template_name(format), &ctx)?)
    }
}

fn template_name(format: RenderFormat) -> &'static str {
    match format {
        RenderFormat::Text => "page.txt",
        RenderFormat::Html => "page.html",
    }
}
