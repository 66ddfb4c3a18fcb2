use super::layout::{
    layout_document, FontStyle, PageLayout, DIVIDER, LEADING, PHOTO_ORIGIN, TEXT_ORIGIN, TITLE_Y,
};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::model::{Ingredient, PhotoAsset};
use image::GenericImageView;
use log::{debug, info};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Pt, Rgb,
};
use std::fs;
use std::path::{Path, PathBuf};

/// A4, in points
const PAGE_SIZE: (f32, f32) = (595.27, 841.89);

/// Photo pixels map 1:1 onto points.
const PHOTO_DPI: f32 = 72.0;

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Renders one recipe onto a single PDF page.
///
/// Nothing is paginated: content longer than the page runs off the bottom or
/// under the photo.
pub struct PdfRenderer {
    options: RenderOptions,
}

impl PdfRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Build the page and return the serialized PDF.
    pub fn render_bytes(
        &self,
        ingredients: &[Ingredient],
        instructions: &[String],
        title: &str,
        photo: &PhotoAsset,
    ) -> Result<Vec<u8>> {
        let layout = layout_document(ingredients, instructions, title, &self.options);
        // Decode first so a broken download fails before any drawing happens
        let picture = image::load_from_memory(&photo.bytes)?;

        let (doc, page, layer) = PdfDocument::new(
            self.options.document_title.clone(),
            mm(PAGE_SIZE.0),
            mm(PAGE_SIZE.1),
            "Recipe",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc.add_builtin_font(BuiltinFont::Courier)?;
        let bold = doc.add_builtin_font(BuiltinFont::CourierBold)?;

        layer.set_fill_color(black());
        layer.set_outline_color(black());

        layer.use_text(
            layout.title.clone(),
            layout.title_size,
            mm(layout.title_x),
            mm(TITLE_Y),
            &regular,
        );

        let (x1, x2, y) = DIVIDER;
        layer.set_outline_thickness(1.0);
        layer.add_line(Line {
            points: vec![
                (Point::new(mm(x1), mm(y)), false),
                (Point::new(mm(x2), mm(y)), false),
            ],
            is_closed: false,
        });

        write_text_block(&layer, &layout, &Fonts { regular, bold });

        Image::from_dynamic_image(&picture).add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(mm(PHOTO_ORIGIN.0)),
                translate_y: Some(mm(PHOTO_ORIGIN.1)),
                dpi: Some(PHOTO_DPI),
                ..Default::default()
            },
        );

        debug!(
            "Laid out {} text lines and a {}x{} photo",
            layout.lines.len(),
            picture.width(),
            picture.height()
        );

        Ok(doc.save_to_bytes()?)
    }

    /// Render and write `<output_dir>/<output_name>.pdf`, replacing any existing file.
    ///
    /// `output_name` is used as-is; a name containing path separators will
    /// fail to write or land somewhere unexpected.
    pub fn render(
        &self,
        ingredients: &[Ingredient],
        instructions: &[String],
        output_name: &str,
        title: &str,
        photo: &PhotoAsset,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let bytes = self.render_bytes(ingredients, instructions, title, photo)?;
        let path = output_dir.join(format!("{output_name}.pdf"));
        fs::write(&path, &bytes)?;

        info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }
}

fn write_text_block(layer: &PdfLayerReference, layout: &PageLayout, fonts: &Fonts) {
    layer.begin_text_section();
    layer.set_text_cursor(mm(TEXT_ORIGIN.0), mm(TEXT_ORIGIN.1));

    for line in &layout.lines {
        let font = fonts.get(line.style);
        layer.set_font(font, line.size);
        layer.set_line_height(line.size * LEADING);
        layer.write_text(line.text.clone(), font);
        layer.add_line_break();
    }

    layer.end_text_section();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use image::{DynamicImage, ImageOutputFormat, RgbImage};
    use std::io::Cursor;

    fn png_photo(width: u32, height: u32) -> PhotoAsset {
        let pixels = RgbImage::from_pixel(width, height, image::Rgb([200, 80, 40]));
        let img = DynamicImage::ImageRgb8(pixels);
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageOutputFormat::Png).unwrap();

        PhotoAsset {
            url: "https://example.com/img.png".to_string(),
            bytes: bytes.into_inner(),
        }
    }

    fn ingredients() -> Vec<Ingredient> {
        vec![
            Ingredient {
                text: "1 cup long-grain rice".to_string(),
            },
            Ingredient {
                text: "1 lime, zested".to_string(),
            },
        ]
    }

    #[test]
    fn test_render_bytes_is_pdf() {
        let renderer = PdfRenderer::new(RenderOptions::default());
        let instructions = vec![
            "Rinse the rice".to_string(),
            " Cook".to_string(),
            String::new(),
        ];

        let bytes = renderer
            .render_bytes(
                &ingredients(),
                &instructions,
                "Cilantro Lime Rice",
                &png_photo(4, 3),
            )
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_render_bytes_handles_overflowing_content() {
        let renderer = PdfRenderer::new(RenderOptions::default());
        let instructions: Vec<String> = (0..200)
            .map(|i| format!("Step {i} {}", "z".repeat(140)))
            .collect();

        let bytes = renderer
            .render_bytes(&ingredients(), &instructions, "Long", &png_photo(2, 2))
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_bytes_accepts_webp_photo() {
        // 1x1 lossless WebP
        const WEBP: [u8; 34] = [
            0x52, 0x49, 0x46, 0x46, 0x1a, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50, 0x56, 0x50,
            0x38, 0x4c, 0x0d, 0x00, 0x00, 0x00, 0x2f, 0x00, 0x00, 0x00, 0x10, 0x07, 0x10, 0x11,
            0x11, 0x88, 0x88, 0xfe, 0x07, 0x00,
        ];
        let renderer = PdfRenderer::new(RenderOptions::default());
        let photo = PhotoAsset {
            url: "https://example.com/rice.webp".to_string(),
            bytes: WEBP.to_vec(),
        };

        let bytes = renderer
            .render_bytes(&ingredients(), &["Cook".to_string()], "Rice", &photo)
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_bytes_accepts_gif_photo() {
        let pixels = RgbImage::from_pixel(3, 2, image::Rgb([10, 120, 30]));
        let mut gif = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(pixels)
            .write_to(&mut gif, ImageOutputFormat::Gif)
            .unwrap();
        let renderer = PdfRenderer::new(RenderOptions::default());
        let photo = PhotoAsset {
            url: "https://example.com/rice.gif".to_string(),
            bytes: gif.into_inner(),
        };

        let bytes = renderer
            .render_bytes(&ingredients(), &[], "Rice", &photo)
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_rejects_empty_photo() {
        let renderer = PdfRenderer::new(RenderOptions::default());
        let photo = PhotoAsset {
            url: "https://example.com/img.png".to_string(),
            bytes: Vec::new(),
        };

        let result = renderer.render_bytes(&ingredients(), &[], "Rice", &photo);
        assert!(matches!(result, Err(RecipeError::Image(_))));
    }

    #[test]
    fn test_render_writes_named_file_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PdfRenderer::new(RenderOptions::default());

        let first = renderer
            .render(
                &ingredients(),
                &["Boil".to_string()],
                "Rice",
                "Rice",
                &png_photo(2, 2),
                dir.path(),
            )
            .unwrap();
        assert_eq!(first, dir.path().join("Rice.pdf"));
        let first_bytes = fs::read(&first).unwrap();

        let second = renderer
            .render(
                &[],
                &["Something else entirely".to_string()],
                "Rice",
                "Other",
                &png_photo(8, 8),
                dir.path(),
            )
            .unwrap();
        let second_bytes = fs::read(&second).unwrap();

        assert_eq!(first, second);
        assert!(!second_bytes.is_empty());
        assert_ne!(first_bytes, second_bytes);
    }

    #[test]
    fn test_render_with_separator_in_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PdfRenderer::new(RenderOptions::default());

        let result = renderer.render(
            &ingredients(),
            &[],
            "Rice/Beans",
            "Rice/Beans",
            &png_photo(2, 2),
            dir.path(),
        );

        assert!(matches!(result, Err(RecipeError::Io(_))));
    }
}
