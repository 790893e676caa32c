use crate::analysis::classify::{Category, Classification};
use crate::analysis::usage::UnusedAssets;
use crate::config::AppConfig;
use crate::engine::AuditResult;
use chrono::{DateTime, Local};
use colored::{Color, Colorize};
use std::collections::BTreeMap;
use std::io::{self, Write};

const RULE: &str = "**************************************************";

/// Colors used for each kind of section heading.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub colorize: bool,
    pub error: Color,
    pub warning: Color,
    pub notice: Color,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            colorize: true,
            error: Color::Red,
            warning: Color::Yellow,
            notice: Color::Green,
        }
    }
}

impl ReportStyle {
    pub fn plain() -> Self {
        Self {
            colorize: false,
            ..Self::default()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colorize {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

pub struct ReportRenderer {
    style: ReportStyle,
    image_extension: String,
}

impl ReportRenderer {
    pub fn new(style: ReportStyle, image_extension: &str) -> Self {
        Self {
            style,
            image_extension: image_extension.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let style = ReportStyle {
            colorize: config.colorize,
            ..ReportStyle::default()
        };
        Self::new(style, &config.image_extension)
    }

    pub fn render<W: Write>(&self, result: &AuditResult, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        self.render_summary(&result.classification, &result.unused, &result.finished_at, out)?;
        self.render_details(&result.classification, &result.unused, out)
    }

    pub fn render_summary<W: Write>(
        &self,
        classification: &Classification,
        unused: &UnusedAssets,
        finished_at: &DateTime<Local>,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "                      RESULTS")?;
        writeln!(
            out,
            "  {} missing images",
            classification.count_images(Category::Missing)
        )?;
        writeln!(
            out,
            "  {} images that will be upscaled",
            classification.count_images(Category::WillUpscale)
        )?;
        writeln!(
            out,
            "  {} images that will be downscaled",
            classification.count_images(Category::WillDownscale)
        )?;
        writeln!(
            out,
            "  {} unused images ({})",
            unused.len(),
            unused.formatted_size()
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "  {}",
            finished_at.format("                          -- %m/%d/%Y %I:%M%p")
        )?;
        writeln!(out, "{}", RULE)?;
        writeln!(out)
    }

    pub fn render_details<W: Write>(
        &self,
        classification: &Classification,
        unused: &UnusedAssets,
        out: &mut W,
    ) -> io::Result<()> {
        for category in Category::ALL {
            let (heading, color) = self.heading(category);
            self.render_by_file(classification.get(category), heading, color, out)?;
        }
        self.render_list(
            &unused.names,
            "[NOTICE] These images are unused:",
            self.style.notice,
            out,
        )
    }

    fn heading(&self, category: Category) -> (&'static str, Color) {
        match category {
            Category::Missing => (
                "[ERROR] These images are referenced but don't exist:",
                self.style.error,
            ),
            Category::WillUpscale => (
                "[WARNING] These images will be upscaled on retina devices:",
                self.style.warning,
            ),
            Category::WillDownscale => (
                "[WARNING] These images will be downscaled on non-retina devices:",
                self.style.warning,
            ),
        }
    }

    fn render_by_file<W: Write>(
        &self,
        by_file: &BTreeMap<String, Vec<String>>,
        heading: &str,
        color: Color,
        out: &mut W,
    ) -> io::Result<()> {
        if by_file.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", self.style.paint(heading, color))?;
        for (file, images) in by_file {
            writeln!(out, "{}", file)?;
            let mut sorted: Vec<&String> = images.iter().collect();
            sorted.sort();
            for image in sorted {
                writeln!(out, "  {}.{}", image, self.image_extension)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_list<W: Write>(
        &self,
        names: &[String],
        heading: &str,
        color: Color,
        out: &mut W,
    ) -> io::Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", self.style.paint(heading, color))?;
        let mut sorted: Vec<&String> = names.iter().collect();
        sorted.sort();
        for name in sorted {
            writeln!(out, "  {}.{}", name, self.image_extension)?;
        }
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::AssetCatalog;
    use crate::analysis::classify::{classify, References};
    use chrono::TimeZone;

    fn render_to_string(classification: &Classification, unused: &UnusedAssets) -> String {
        let renderer = ReportRenderer::new(ReportStyle::plain(), "png");
        let mut out = Vec::new();
        renderer.render_details(classification, unused, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let text = render_to_string(&Classification::default(), &UnusedAssets::default());
        assert!(text.is_empty());
    }

    #[test]
    fn test_sections_sorted_by_file_then_image() {
        let catalog = AssetCatalog::build(["b", "a"], "@2x");
        let mut references = References::new();
        references.insert(
            "z.m".to_string(),
            vec!["b".to_string(), "a".to_string()],
        );
        references.insert("a.xib".to_string(), vec!["ghost".to_string()]);
        let classification = classify(&catalog, &references);
        let unused = UnusedAssets {
            names: vec!["spare@2x".to_string()],
            total_bytes: 10,
        };

        let text = render_to_string(&classification, &unused);
        let expected = "\
[ERROR] These images are referenced but don't exist:
a.xib
  ghost.png

[WARNING] These images will be upscaled on retina devices:
z.m
  a.png
  b.png

[NOTICE] These images are unused:
  spare@2x.png

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_counts_and_timestamp() {
        let catalog = AssetCatalog::build(["logo@2x"], "@2x");
        let mut references = References::new();
        references.insert("a.m".to_string(), vec!["logo".to_string()]);
        references.insert("b.m".to_string(), vec!["logo".to_string(), "gone".to_string()]);
        let classification = classify(&catalog, &references);
        let unused = UnusedAssets {
            names: Vec::new(),
            total_bytes: 0,
        };
        let at = Local.with_ymd_and_hms(2012, 8, 25, 14, 5, 0).unwrap();

        let renderer = ReportRenderer::new(ReportStyle::plain(), "png");
        let mut out = Vec::new();
        renderer
            .render_summary(&classification, &unused, &at, &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  1 missing images\n"));
        assert!(text.contains("  0 images that will be upscaled\n"));
        assert!(text.contains("  1 images that will be downscaled\n"));
        assert!(text.contains("  0 unused images (~0 B)\n"));
        assert!(text.contains("-- 08/25/2012 02:05PM"));
    }

    #[test]
    fn test_plain_style_emits_no_escape_codes() {
        let style = ReportStyle::plain();
        assert_eq!(style.paint("hello", Color::Red), "hello");
    }
}
