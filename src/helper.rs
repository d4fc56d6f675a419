use crate::barcode::{BitPattern, SymbologyKind};
use crate::error::{BarcodeError, Result};
use crate::layout::{Layout, BAR_TOP, TARGET_WIDTH};

use image::{ImageBuffer, Luma};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// MIME type of every document produced by this crate.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Status attached to a successfully rendered barcode.
pub const STATUS_OK: u16 = 200;

/// Status attached to an error document.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Largest raster, in pixels, [`to_image_buffer`] will allocate.
pub const MAX_RASTER_PIXELS: u64 = 1 << 26;

const ERROR_CANVAS_HEIGHT: u32 = 100;

/// A rendered SVG document. Immutable; carries nothing of the request that made it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageDocument(String);

impl ImageDocument {
    /// The SVG markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the document, returning its markup.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Response of [`generate`]: the document, its content type and a status code.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GeneratedBarcode {
    pub document: String,
    pub content_type: &'static str,
    pub status: u16,
}

impl GeneratedBarcode {
    /// `true` when the document is a barcode rather than an error document.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/*---- Utilities ----*/

/// Escapes `& < > " '` for use in XML text and attributes.
///
/// Every character is handled once, so `&` in the input becomes `&amp;` and the
/// entities produced for the other characters are never escaped a second time.
/// Control characters XML 1.0 cannot carry are dropped; tab, line feed and
/// carriage return are kept.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if c.is_control() && c < ' ' => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

// Returns a string of SVG code for an image depicting the given pattern placed
// according to `layout`, with `value` as a centered label when `display_label` is set.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(
    pattern: &BitPattern,
    layout: &Layout,
    value: &str,
    display_label: bool,
) -> ImageDocument {
    let width = layout.canvas_width();
    let height = layout.canvas_height();
    let mut result = svg_header(width, height);
    result += &background_rect(width, height);
    for (index, bar) in pattern.modules().enumerate() {
        if bar {
            result += &format!(
                "\t<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#000000\"/>\n",
                layout.module_x(index),
                BAR_TOP,
                layout.module_width(),
                layout.barcode_height()
            );
        }
    }
    if display_label {
        result += &format!(
            "\t<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"monospace\" \
             font-size=\"16\" fill=\"#000000\">{}</text>\n",
            width / 2.0,
            layout.barcode_height() + 22,
            escape_xml(value)
        );
    }
    result += "</svg>\n";
    ImageDocument(result)
}

/// Returns a fixed-size document showing `message` in red, used in place of a barcode
/// whenever rendering fails.
pub fn error_svg_string(message: &str) -> ImageDocument {
    let width = f64::from(TARGET_WIDTH);
    let mut result = svg_header(width, ERROR_CANVAS_HEIGHT);
    result += &background_rect(width, ERROR_CANVAS_HEIGHT);
    result += &format!(
        "\t<text x=\"{}\" y=\"55\" text-anchor=\"middle\" font-family=\"Arial, sans-serif\" \
         font-size=\"14\" fill=\"#FF0000\">Error: {}</text>\n",
        width / 2.0,
        escape_xml(message)
    );
    result += "</svg>\n";
    ImageDocument(result)
}

fn svg_header(width: f64, height: u32) -> String {
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
         width=\"{0}\" height=\"{1}\" viewBox=\"0 0 {0} {1}\">\n",
        width, height
    );
    result
}

fn background_rect(width: f64, height: u32) -> String {
    format!(
        "\t<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#FFFFFF\"/>\n",
        width, height
    )
}

/// Encodes `value`, lays it out and renders it as an SVG document.
///
/// # Errors
///
/// Returns the layout error when a parameter is out of range.
///
/// # Example
///
/// ```
/// use barcode_svg::helper::render_barcode;
///
/// let svg = render_barcode("123456789", "CODE128", 2, 100, true).unwrap();
/// assert!(svg.as_str().contains(">123456789</text>"));
/// ```
pub fn render_barcode(
    value: &str,
    format: &str,
    bar_width: u32,
    height: u32,
    display_value: bool,
) -> Result<ImageDocument> {
    let pattern = SymbologyKind::from_name(format).encode(value);
    let layout = Layout::compute(&pattern, bar_width, height, display_value)?;
    Ok(to_svg_string(&pattern, &layout, value, display_value))
}

/// Generates a barcode document for a request whose defaults have already been applied.
///
/// Never fails: a rendering failure yields an error document with status 400.
///
/// # Example
///
/// ```
/// use barcode_svg::helper::generate;
///
/// let response = generate("HELLO", "CODE39", 2, 100, true);
/// assert_eq!(response.status, 200);
/// assert_eq!(response.content_type, "image/svg+xml");
///
/// let failed = generate("HELLO", "CODE39", 2, 0, true);
/// assert_eq!(failed.status, 400);
/// ```
pub fn generate(
    value: &str,
    format: &str,
    bar_width: u32,
    height: u32,
    display_value: bool,
) -> GeneratedBarcode {
    let rendered = render_barcode(value, format, bar_width, height, display_value);
    let (document, status) = match rendered {
        Ok(document) => (document, STATUS_OK),
        Err(err) => {
            log::warn!("Failed to render {:?} as {}: {}", value, format, err);
            (error_svg_string(&err.to_string()), STATUS_BAD_REQUEST)
        }
    };
    GeneratedBarcode {
        document: document.into_string(),
        content_type: SVG_CONTENT_TYPE,
        status,
    }
}

/// Renders the pattern as block characters with a four module quiet zone.
pub fn to_console_string(pattern: &BitPattern) -> String {
    let border = 4;
    let mut line = String::with_capacity((pattern.len() + 2 * border) * 3);
    line.extend(std::iter::repeat(' ').take(border));
    line.extend(pattern.modules().map(|bar| if bar { '█' } else { ' ' }));
    line.extend(std::iter::repeat(' ').take(border));

    let mut result = String::new();
    for _ in 0..3 {
        result += &line;
        result += "\n";
    }
    result
}

/// Prints the given pattern to the console.
pub fn print_barcode(pattern: &BitPattern) {
    println!("{}", to_console_string(pattern));
}

/// Rasterizes the bars of `pattern` into a grayscale image sized like the SVG canvas.
///
/// The label is not drawn. Fractional padding is rounded down to whole pixels.
///
/// # Errors
///
/// Returns [`BarcodeError::CanvasTooLarge`] when the image would exceed
/// [`MAX_RASTER_PIXELS`].
///
/// # Example
///
/// ```
/// use barcode_svg::barcode::encode_code128;
/// use barcode_svg::helper::to_image_buffer;
/// use barcode_svg::layout::Layout;
///
/// let pattern = encode_code128("123456789");
/// let layout = Layout::compute(&pattern, 2, 100, false).unwrap();
/// let img = to_image_buffer(&pattern, &layout).unwrap();
/// assert_eq!(img.dimensions(), (450, 120));
/// ```
pub fn to_image_buffer(
    pattern: &BitPattern,
    layout: &Layout,
) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>> {
    let too_large = || BarcodeError::CanvasTooLarge {
        bars: pattern.len(),
        height: layout.barcode_height(),
    };
    let width = layout.canvas_width().ceil();
    if width > f64::from(u32::MAX) {
        return Err(too_large());
    }
    let width = width as u32;
    let height = layout.canvas_height();
    if u64::from(width) * u64::from(height) > MAX_RASTER_PIXELS {
        return Err(too_large());
    }

    let left = layout.horizontal_padding().floor() as u32;
    let module_width = layout.module_width();
    let top = BAR_TOP;
    let bottom = BAR_TOP.saturating_add(layout.barcode_height());
    let bars: Vec<bool> = pattern.modules().collect();

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let dark = y >= top
            && y < bottom
            && x >= left
            && bars
                .get(((x - left) / module_width) as usize)
                .copied()
                .unwrap_or(false);
        if dark {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        }
    }))
}

/// Rasterizes a barcode and saves it as a PNG file.
///
/// # Arguments
///
/// * `pattern` - The encoded barcode.
/// * `layout` - Geometry computed for `pattern`.
/// * `directory_path` - Optional. The directory the image is saved in. Defaults to "generated".
/// * `filename` - Optional. File name without extension. Defaults to a timestamp.
///
/// # Errors
///
/// Returns [`BarcodeError::CanvasTooLarge`] for oversized images,
/// [`BarcodeError::Io`] when the directory cannot be created and
/// [`BarcodeError::Image`] when the PNG cannot be written.
pub fn save_png(
    pattern: &BitPattern,
    layout: &Layout,
    directory_path: Option<&str>,
    filename: Option<&str>,
) -> Result<String> {
    let img = to_image_buffer(pattern, layout)?;

    let directory_path = directory_path.unwrap_or("generated");
    let filename = match filename {
        Some(name) => name.to_string(),
        None => {
            let since_the_epoch = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            since_the_epoch.as_millis().to_string()
        }
    };

    let file_path = format!("{}/{}.png", directory_path, filename);

    if !Path::new(directory_path).exists() {
        fs::create_dir_all(directory_path)?;
    }

    img.save(Path::new(&file_path))?;
    log::debug!("Saved barcode image to {}", file_path);
    Ok(file_path)
}
