//! Template rendering with Tera

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer with embedded templates
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", include_str!("../templates/base.html"))?;
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;
        tera.add_raw_template("quran.html", include_str!("../templates/quran.html"))?;
        tera.add_raw_template("surah.html", include_str!("../templates/surah.html"))?;
        tera.add_raw_template("hadith.html", include_str!("../templates/hadith.html"))?;
        tera.add_raw_template("chapter.html", include_str!("../templates/chapter.html"))?;
        tera.add_raw_template("chat.html", include_str!("../templates/chat.html"))?;
        tera.add_raw_template("stats.html", include_str!("../templates/stats.html"))?;
        tera.add_raw_template("error.html", include_str!("../templates/error.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with a Tera context
    pub fn render(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}
