//! Scene export to gnuplot `splot` scripts.
//!
//! Primitives are grouped by canonical style; every group becomes one plot
//! clause with an inline data block, followed by a single labels clause.
//! Colors travel through the data as palette indices.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use splot_core::{Palette, Primitive, PrimitiveKind, Scene, Shape, StyleGroups, StyleKey};

use crate::error::{ScriptError, ScriptResult};
use crate::label::label_anchor;

/// Labels clause; always the last plot clause.
const LABELS_CLAUSE: &str =
    "using 1:2:3:4:5 with labels left textcolor palette offset char 1,char 1";

/// Configuration for script export.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// Column separator in data rows (default: space).
    pub separator: char,
    /// Replacement for separators and line breaks inside label text
    /// (default: `-`).
    pub label_replacement: char,
    /// Emit the trailing `pause mouse keypress` (default: true).
    pub interactive_pause: bool,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            separator: ' ',
            label_replacement: '-',
            interactive_pause: true,
        }
    }
}

/// Writes a [`Scene`] as a gnuplot script.
#[derive(Debug, Clone, Default)]
pub struct ScriptExporter {
    config: ScriptConfig,
}

impl ScriptExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ScriptConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ScriptConfig::default())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    /// Write the script for `scene` to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Create`] if the file cannot be created and
    /// [`ScriptError::Write`] if writing fails part way.
    pub fn write_file(&self, scene: &Scene, path: impl AsRef<Path>) -> ScriptResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ScriptError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Writing splot script to {}", path.display());
        self.encode(scene, BufWriter::new(file))
    }

    /// Write the script for `scene` into `sink` and flush it.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Write`] if the sink fails.
    pub fn encode<W: Write>(&self, scene: &Scene, mut sink: W) -> ScriptResult<()> {
        let script = self.render_to_string(scene);
        sink.write_all(script.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Render the script for `scene`.
    ///
    /// An empty scene renders the header directives only.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn render_to_string(&self, scene: &Scene) -> String {
        let mut out = String::with_capacity(4096);

        if let Some(title) = scene.title_text() {
            let _ = writeln!(out, "set title {}", quote(title));
        }
        out.push_str("set view equal xyz\n");
        out.push_str("unset key\n");

        if scene.is_empty() {
            return out;
        }

        let sep = self.config.separator;
        if sep != ' ' {
            let _ = writeln!(out, "set datafile separator {}", quote(&sep.to_string()));
        }

        let primitives = scene.primitives();
        let groups = StyleGroups::from_primitives(primitives);
        let palette = Palette::from_sorted_keys(groups.keys());

        // Palette
        let _ = writeln!(out, "set palette model RGB maxcolors {}", palette.len());
        let defined: Vec<String> = palette
            .entries()
            .iter()
            .map(|entry| format!("{} {}", entry.index, quote(&entry.color)))
            .collect();
        let _ = writeln!(out, "set palette defined ({})", defined.join(", "));
        let _ = writeln!(out, "set cbrange [-0.5:{:.1}]", palette.len() as f64 - 0.5);
        out.push('\n');

        // Plot clauses
        for (i, group) in groups.iter().enumerate() {
            if i == 0 {
                out.push_str("splot \"-\" ");
            } else {
                out.push_str(" \\\n  , \"\" ");
            }
            out.push_str(&plot_clause(&group.key));
        }
        let _ = writeln!(out, " \\\n  , \"\" {LABELS_CLAUSE}");

        // Data blocks, one per clause
        for group in groups.iter() {
            let color = color_index(&palette, &group.key);
            for &member in &group.members {
                if let Some(prim) = primitives.get(member) {
                    write_data_row(&mut out, prim, color, sep);
                }
            }
            out.push_str("e\n");
        }

        // Label block
        for (i, prim) in primitives.iter().enumerate() {
            let Some(text) = prim.visible_label() else {
                continue;
            };
            let color = groups
                .group_of(i)
                .map_or(0, |group| color_index(&palette, &group.key));
            let text = self.sanitize_label(text);
            let [x, y, z] = label_anchor(prim);
            let _ = writeln!(out, "{x}{sep}{y}{sep}{z}{sep}{text}{sep}{color}");
        }
        out.push_str("e\n");

        if self.config.interactive_pause {
            out.push_str("pause mouse keypress\n");
        }

        tracing::debug!(
            "Rendered {} primitives in {} style groups with {} colors",
            primitives.len(),
            groups.len(),
            palette.len()
        );
        out
    }

    /// Replace characters that would split a label across columns or rows.
    ///
    /// With the default space separator the tool splits on any whitespace,
    /// so every whitespace character is replaced.
    fn sanitize_label(&self, text: &str) -> String {
        let sep = self.config.separator;
        text.chars()
            .map(|c| {
                let splits = if sep == ' ' {
                    c.is_whitespace()
                } else {
                    c == sep || c == '\n' || c == '\r'
                };
                if splits {
                    self.config.label_replacement
                } else {
                    c
                }
            })
            .collect()
    }
}

/// The plot clause for one style group, without the leading separator.
fn plot_clause(key: &StyleKey) -> String {
    let (mode, columns, size) = match key.kind {
        PrimitiveKind::Segment => ("vectors", "1:2:3:4:5:6:7", "linewidth"),
        PrimitiveKind::Point => ("points", "1:2:3:4", "pointsize"),
    };
    if key.attr.is_empty() {
        format!("using {columns} with {mode} {size} {} palette", key.width)
    } else {
        format!(
            "using {columns} with {mode} {} {size} {} palette",
            key.attr, key.width
        )
    }
}

/// Palette index of a group's color.
fn color_index(palette: &Palette, key: &StyleKey) -> usize {
    // Every group color was fed into the palette.
    palette.index_of(&key.color).unwrap_or_default()
}

/// `x y z idx` for points, `x0 y0 z0 dx dy dz idx` for segments.
fn write_data_row(out: &mut String, prim: &Primitive, color: usize, sep: char) {
    match prim.shape {
        Shape::Point { position: [x, y, z] } => {
            let _ = writeln!(out, "{x}{sep}{y}{sep}{z}{sep}{color}");
        }
        Shape::Segment { start: [x, y, z], .. } => {
            let [dx, dy, dz] = prim.direction();
            let _ = writeln!(
                out,
                "{x}{sep}{y}{sep}{z}{sep}{dx}{sep}{dy}{sep}{dz}{sep}{color}"
            );
        }
    }
}

/// Double-quote a string for the script, escaping quotes, backslashes and
/// line-breaking control characters.
fn quote(input: &str) -> String {
    let mut quoted = String::with_capacity(input.len() + 2);
    quoted.push('"');
    for c in input.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: [f32; 3] = [0.0, 0.0, 0.0];

    fn lines(script: &str) -> Vec<&str> {
        script.lines().collect()
    }

    #[test]
    fn test_empty_scene_header_only() {
        let scene = Scene::new();
        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert_eq!(script, "set view equal xyz\nunset key\n");
    }

    #[test]
    fn test_empty_scene_with_title() {
        let mut scene = Scene::new();
        scene.title("Nothing \"here\"");
        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert_eq!(
            script,
            "set title \"Nothing \\\"here\\\"\"\nset view equal xyz\nunset key\n"
        );
    }

    #[test]
    fn test_single_labelled_point() {
        let mut scene = Scene::new();
        scene.point(ORIGIN).color("black").label("O");

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        let rows = lines(&script);
        assert!(rows.contains(&"set palette defined (0 \"black\")"));
        assert!(rows.contains(&"set cbrange [-0.5:0.5]"));
        assert!(rows.contains(&"splot \"-\" using 1:2:3:4 with points pointsize 3 palette \\"));
        assert_eq!(
            rows.iter().filter(|r| **r == "0 0 0 0").count(),
            1,
            "point row"
        );
        assert!(rows.contains(&"0 0 0 O 0"));
        assert_eq!(rows.last(), Some(&"pause mouse keypress"));
    }

    #[test]
    fn test_segment_rows_carry_direction() {
        let mut scene = Scene::new();
        scene.line([1.0, 1.0, 1.0], [2.0, 3.0, 5.0]);

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert!(lines(&script).contains(&"1 1 1 1 2 4 0"));
        assert!(!script.contains("2 3 5"));
    }

    #[test]
    fn test_segments_emitted_before_points() {
        let mut scene = Scene::new();
        scene
            .point([5.0, 5.0, 5.0])
            .line(ORIGIN, [1.0, 0.0, 0.0]);

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        let vectors = script.find("with vectors").expect("vectors clause");
        let points = script.find("with points").expect("points clause");
        assert!(vectors < points);

        let seg_row = script.find("0 0 0 1 0 0 0").expect("segment row");
        let point_row = script.find("5 5 5 0").expect("point row");
        assert!(seg_row < point_row);
    }

    #[test]
    fn test_one_labels_clause_and_block_per_group() {
        let mut scene = Scene::new();
        scene
            .line(ORIGIN, [1.0, 0.0, 0.0])
            .color("red")
            .line(ORIGIN, [0.0, 1.0, 0.0])
            .color("green")
            .point(ORIGIN);

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert_eq!(script.matches("with labels").count(), 1);
        // Three groups plus the label block.
        assert_eq!(lines(&script).iter().filter(|l| **l == "e").count(), 4);
        assert!(script.contains("set palette model RGB maxcolors 2"));
        assert!(script.contains("set cbrange [-0.5:1.5]"));
    }

    #[test]
    fn test_palette_indices_in_rows() {
        let mut scene = Scene::new();
        scene
            .line(ORIGIN, [1.0, 0.0, 0.0])
            .color("red")
            .line(ORIGIN, [0.0, 1.0, 0.0])
            .color("blue")
            .line(ORIGIN, [0.0, 0.0, 1.0])
            .color("red")
            .width(2);

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        // Keys sort by width, then color: (1, blue), (1, red), (2, red).
        assert!(script.contains("set palette defined (0 \"blue\", 1 \"red\")"));
        assert!(lines(&script).contains(&"0 0 0 0 1 0 0"));
        assert!(lines(&script).contains(&"0 0 0 1 0 0 1"));
        assert!(lines(&script).contains(&"0 0 0 0 0 1 1"));
    }

    #[test]
    fn test_label_separator_replaced() {
        let mut scene = Scene::new();
        scene.point(ORIGIN).label("rotation axis\nv2");

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert!(lines(&script).contains(&"0 0 0 rotation-axis-v2 0"));
    }

    #[test]
    fn test_head_attribute_in_clause() {
        let mut scene = Scene::new();
        scene.line(ORIGIN, [1.0, 0.0, 0.0]).filled_head().width(2);

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert!(script.contains(
            "splot \"-\" using 1:2:3:4:5:6:7 with vectors filled head linewidth 2 palette \\"
        ));
    }

    #[test]
    fn test_point_attribute_in_clause() {
        let mut scene = Scene::new();
        scene.point(ORIGIN).attr("pointtype 7");

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert!(script.contains("with points pointtype 7 pointsize 3 palette"));
    }

    #[test]
    fn test_custom_config() {
        let mut scene = Scene::new();
        scene.point(ORIGIN).label("a,b c");

        let exporter = ScriptExporter::new(ScriptConfig {
            separator: ',',
            label_replacement: '_',
            interactive_pause: false,
        });
        let script = exporter.render_to_string(&scene);
        assert!(lines(&script).contains(&"0,0,0,0"));
        assert!(lines(&script).contains(&"0,0,0,a_b c,0"));
        assert!(!script.contains("pause"));
        assert!(script.ends_with("e\n"));
    }

    #[test]
    fn test_unlabelled_scene_has_empty_label_block() {
        let mut scene = Scene::new();
        scene.point(ORIGIN).label("");

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert!(script.ends_with("0 0 0 0\ne\ne\npause mouse keypress\n"));
    }

    #[test]
    fn test_encode_matches_render() {
        let mut scene = Scene::new();
        scene.title("t").line(ORIGIN, [1.0, 1.0, 1.0]).label("x");

        let exporter = ScriptExporter::with_defaults();
        let mut buf = Vec::new();
        exporter.encode(&scene, &mut buf).expect("encode");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            exporter.render_to_string(&scene)
        );
    }

    #[test]
    fn test_emission_does_not_mutate_scene() {
        let mut scene = Scene::new();
        scene.point(ORIGIN).label("a b");
        let before = scene.clone();

        let exporter = ScriptExporter::with_defaults();
        let first = exporter.render_to_string(&scene);
        let second = exporter.render_to_string(&scene);
        assert_eq!(first, second);
        assert_eq!(scene, before);
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_quote_escapes_control_characters() {
        assert_eq!(quote("a\tb\r\nc"), "\"a\\tb\\r\\nc\"");
    }

    #[test]
    fn test_multiline_title_stays_on_one_line() {
        let mut scene = Scene::new();
        scene.title("line1\nline2");

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert_eq!(lines(&script)[0], "set title \"line1\\nline2\"");
        assert_eq!(lines(&script).len(), 3);
    }

    #[test]
    fn test_custom_separator_declared() {
        let mut scene = Scene::new();
        scene.point([1.0, 2.0, 3.0]).label("a b");

        let exporter = ScriptExporter::new(ScriptConfig {
            separator: ',',
            ..ScriptConfig::default()
        });
        let script = exporter.render_to_string(&scene);
        let rows = lines(&script);
        let directive = rows
            .iter()
            .position(|l| *l == "set datafile separator \",\"")
            .expect("separator directive");
        let plot = rows
            .iter()
            .position(|l| l.starts_with("splot"))
            .expect("splot command");
        assert!(directive < plot);
        assert!(rows.contains(&"1,2,3,0"));
        assert!(rows.contains(&"1,2,3,a b,0"));
    }

    #[test]
    fn test_default_separator_not_declared() {
        let mut scene = Scene::new();
        scene.point(ORIGIN);

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        assert!(!script.contains("datafile separator"));
    }

    #[test]
    fn test_label_whitespace_replaced_with_default_separator() {
        let mut scene = Scene::new();
        scene.point(ORIGIN).label("a\tb c");

        let script = ScriptExporter::with_defaults().render_to_string(&scene);
        let row = lines(&script)
            .into_iter()
            .find(|l| l.contains("a-b"))
            .expect("label row");
        assert_eq!(row, "0 0 0 a-b-c 0");
        assert_eq!(row.split_whitespace().count(), 5);
    }
}
