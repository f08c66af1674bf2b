//! A4 PDF rendering.
//!
//! Layout is computed first as positioned text and rules per page, measured
//! in millimetres from the top-left corner, and then drawn with `printpdf`.
//! Keeping the two apart lets the pagination be tested without parsing PDF.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use super::{
    COMPANY_ADDRESS, COMPANY_EMAIL, COMPANY_NIT, COMPANY_PHONE, Invoice, InvoiceError, SaleKind,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const LAYER_NAME: &str = "Layer 1";

const LEFT: f32 = 20.0;
const RIGHT: f32 = 190.0;
const COL_QUANTITY: f32 = 110.0;
const COL_UNIT_PRICE: f32 = 135.0;
const COL_TOTAL: f32 = 170.0;

/// Rows past this line continue on a new page.
const PAGE_BREAK_Y: f32 = 250.0;
/// Where rows resume on a continuation page.
const CONTINUATION_TOP_Y: f32 = 20.0;
/// Totals must end above the footer.
const TOTALS_LIMIT_Y: f32 = 272.0;
const FOOTER_Y: [f32; 2] = [280.0, 285.0];

const MAX_NAME_CHARS: usize = 35;
const TRUNCATED_NAME_CHARS: usize = 32;
const ADDRESS_WRAP_CHARS: usize = 90;
const ADDRESS_LINE_HEIGHT: f32 = 6.0;

const DETAIL_GRAY: u8 = 100;
const FOOTER_GRAY: u8 = 150;

/// Millimetres per typographic point.
const MM_PER_PT: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// A drawing operation, positioned in millimetres from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text {
        x: f32,
        y: f32,
        size: f32,
        weight: Weight,
        /// Gray level 0-255; 0 is black.
        gray: u8,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
    },
}

/// Operations for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<Op>,
}

impl Page {
    fn text(&mut self, x: f32, y: f32, size: f32, weight: Weight, text: impl Into<String>) {
        self.ops.push(Op::Text {
            x,
            y,
            size,
            weight,
            gray: 0,
            text: text.into(),
        });
    }

    fn gray_text(&mut self, x: f32, y: f32, size: f32, gray: u8, text: impl Into<String>) {
        self.ops.push(Op::Text {
            x,
            y,
            size,
            weight: Weight::Regular,
            gray,
            text: text.into(),
        });
    }

    fn rule(&mut self, x1: f32, x2: f32, y: f32) {
        self.ops.push(Op::Rule {
            x1,
            x2,
            y,
            thickness: 0.5,
        });
    }

    /// Every text string on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            Op::Rule { .. } => None,
        })
    }
}

/// Lay out an invoice into pages.
#[must_use]
pub fn layout(invoice: &Invoice) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut page = Page::default();

    // Header
    page.text(LEFT, 20.0, 24.0, Weight::Bold, "ADVENTURE WORKS");
    page.text(LEFT, 28.0, 9.0, Weight::Regular, COMPANY_ADDRESS);
    page.text(
        LEFT,
        33.0,
        9.0,
        Weight::Regular,
        format!("Tel: {COMPANY_PHONE} | Email: {COMPANY_EMAIL}"),
    );
    page.text(LEFT, 38.0, 9.0, Weight::Regular, format!("NIT: {COMPANY_NIT}"));

    page.text(LEFT, 50.0, 20.0, Weight::Bold, "FACTURA ELECTRÓNICA");
    page.text(
        LEFT,
        58.0,
        11.0,
        Weight::Regular,
        format!("Número de Orden: {}", invoice.order_number),
    );
    page.text(
        LEFT,
        64.0,
        11.0,
        Weight::Regular,
        format!("Fecha: {}", invoice.date_label()),
    );
    page.rule(LEFT, RIGHT, 70.0);

    // Customer block
    page.text(LEFT, 78.0, 12.0, Weight::Bold, "INFORMACIÓN DEL CLIENTE");
    page.text(
        LEFT,
        86.0,
        10.0,
        Weight::Regular,
        format!("Nombre: {}", invoice.customer_name),
    );
    page.text(
        LEFT,
        92.0,
        10.0,
        Weight::Regular,
        format!("Email: {}", invoice.customer_email),
    );
    let address = wrap(
        &format!("Dirección: {}", invoice.billing_address),
        ADDRESS_WRAP_CHARS,
    );
    let mut y = 98.0;
    for line in &address {
        page.text(LEFT, y, 10.0, Weight::Regular, line.as_str());
        y += ADDRESS_LINE_HEIGHT;
    }

    // Items table
    y += 8.0;
    page.text(LEFT, y, 12.0, Weight::Bold, "DETALLE DE PRODUCTOS");
    y += 8.0;
    page.text(LEFT, y, 10.0, Weight::Bold, "Producto");
    page.text(COL_QUANTITY, y, 10.0, Weight::Bold, "Cant.");
    page.text(COL_UNIT_PRICE, y, 10.0, Weight::Bold, "Precio Unit.");
    page.text(COL_TOTAL, y, 10.0, Weight::Bold, "Total");
    y += 2.0;
    page.rule(LEFT, RIGHT, y);
    y += 6.0;

    for item in &invoice.items {
        if y > PAGE_BREAK_Y {
            pages.push(std::mem::take(&mut page));
            y = CONTINUATION_TOP_Y;
        }

        page.text(LEFT, y, 10.0, Weight::Regular, truncate_name(&item.name));
        let details = item.details();
        if let Some(details) = &details {
            page.gray_text(LEFT, y + 4.0, 8.0, DETAIL_GRAY, details.as_str());
        }
        page.text(
            COL_QUANTITY,
            y,
            10.0,
            Weight::Regular,
            item.quantity.to_string(),
        );
        page.text(
            COL_UNIT_PRICE,
            y,
            10.0,
            Weight::Regular,
            item.unit_price.to_string(),
        );
        page.text(COL_TOTAL, y, 10.0, Weight::Regular, item.total().to_string());

        y += if details.is_some() { 12.0 } else { 8.0 };
    }

    // Totals
    let totals_height = match invoice.sale {
        SaleKind::Online => 38.0,
        SaleKind::InStore { .. } => 52.0,
    };
    if y + totals_height > TOTALS_LIMIT_Y {
        pages.push(std::mem::take(&mut page));
        y = CONTINUATION_TOP_Y;
    }

    y += 4.0;
    page.rule(LEFT, RIGHT, y);
    y += 8.0;

    page.text(COL_UNIT_PRICE, y, 10.0, Weight::Regular, "Subtotal:");
    page.text(
        COL_TOTAL,
        y,
        10.0,
        Weight::Regular,
        invoice.subtotal().with_code(),
    );
    y += 6.0;
    page.text(COL_UNIT_PRICE, y, 10.0, Weight::Regular, "Envío:");
    let shipping = if invoice.shipping.is_zero() {
        "GRATIS".to_string()
    } else {
        invoice.shipping.with_code()
    };
    page.text(COL_TOTAL, y, 10.0, Weight::Regular, shipping);
    y += 6.0;
    page.text(COL_UNIT_PRICE, y, 10.0, Weight::Regular, "Impuestos:");
    page.text(COL_TOTAL, y, 10.0, Weight::Regular, invoice.tax.with_code());

    y += 8.0;
    page.rule(130.0, RIGHT, y);
    y += 6.0;
    page.text(COL_UNIT_PRICE, y, 14.0, Weight::Bold, "TOTAL:");
    page.text(COL_TOTAL, y, 14.0, Weight::Bold, invoice.total().with_code());

    if let SaleKind::InStore {
        amount_paid,
        change,
    } = invoice.sale
    {
        y += 8.0;
        page.text(COL_UNIT_PRICE, y, 10.0, Weight::Regular, "Monto pagado:");
        page.text(COL_TOTAL, y, 10.0, Weight::Regular, amount_paid.with_code());
        y += 6.0;
        page.text(COL_UNIT_PRICE, y, 10.0, Weight::Regular, "Cambio:");
        page.text(COL_TOTAL, y, 10.0, Weight::Regular, change.with_code());
    }

    // Footer
    for (text, y) in [
        "Gracias por su compra en Adventure Works",
        "Este documento es una factura electrónica válida según la legislación de El Salvador",
    ]
    .into_iter()
    .zip(FOOTER_Y)
    {
        page.gray_text(centered_x(text, 8.0), y, 8.0, FOOTER_GRAY, text);
    }

    pages.push(page);
    pages
}

/// Render an invoice to PDF bytes.
///
/// # Errors
///
/// Returns `InvoiceError::Pdf` if fonts cannot be loaded or the document
/// cannot be serialized.
pub fn render(invoice: &Invoice) -> Result<Vec<u8>, InvoiceError> {
    let pages = layout(invoice);

    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("Factura {}", invoice.order_number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        LAYER_NAME,
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| InvoiceError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| InvoiceError::Pdf(e.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, page, &regular, &bold);
    }

    doc.save_to_bytes()
        .map_err(|e| InvoiceError::Pdf(e.to_string()))
}

fn draw_page(
    layer: &PdfLayerReference,
    page: &Page,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    for op in &page.ops {
        match op {
            Op::Text {
                x,
                y,
                size,
                weight,
                gray,
                text,
            } => {
                let level = f32::from(*gray) / 255.0;
                layer.set_fill_color(Color::Rgb(Rgb::new(level, level, level, None)));
                let font = match weight {
                    Weight::Regular => regular,
                    Weight::Bold => bold,
                };
                layer.use_text(text.as_str(), *size, Mm(*x), Mm(PAGE_HEIGHT - y), font);
            }
            Op::Rule {
                x1,
                x2,
                y,
                thickness,
            } => {
                layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
                layer.set_outline_thickness(*thickness);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(PAGE_HEIGHT - y)), false),
                        (Point::new(Mm(*x2), Mm(PAGE_HEIGHT - y)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

/// Shorten long product names to fit the product column.
fn truncate_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_CHARS {
        let head: String = name.chars().take(TRUNCATED_NAME_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Greedy word wrap by character count. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left edge that approximately centres `text` on the page.
fn centered_x(text: &str, size: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)] // Footer strings are short
    let chars = text.chars().count() as f32;
    let width = chars * size * AVG_GLYPH_EM * MM_PER_PT;
    ((PAGE_WIDTH - width) / 2.0).max(0.0)
}
