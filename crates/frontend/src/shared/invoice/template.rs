//! Pure invoice rendering: one order plus a paper profile in, a
//! self-contained HTML document out. Never fails on partial data — absent
//! nested blocks render as zeros and blanks.

use contracts::domain::a004_order::aggregate::Order;

use super::paper::PaperProfile;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::money::{format_inr, format_shipping};

/// GST rate applied client-side. Duplicates the backend's assumption;
/// kept because the payment summary does not carry the rate itself.
pub const GST_RATE: f64 = 0.18;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
}

impl InvoiceTotals {
    /// Subtotal comes from the payment summary, recomputed from line items
    /// when absent; tax is always the client-side GST computation; the
    /// grand total is taken from the summary with a recomputed fallback.
    pub fn from_order(order: &Order) -> Self {
        let summary = &order.payment_summary;
        let subtotal = if summary.subtotal > 0.0 {
            summary.subtotal
        } else {
            order.ordered_items.iter().map(|i| i.line_total()).sum()
        };
        let tax = subtotal * GST_RATE;
        let shipping = summary.shipping;
        let total = if summary.total > 0.0 {
            summary.total
        } else {
            subtotal + tax + shipping
        };
        Self {
            subtotal,
            tax,
            shipping,
            total,
        }
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Short order reference for the receipt header.
fn order_ref(id: &str) -> String {
    let tail: String = id
        .chars()
        .rev()
        .take(8)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("#{}", tail.to_uppercase())
}

pub fn render_invoice(order: &Order, profile: PaperProfile) -> String {
    let totals = InvoiceTotals::from_order(order);
    let body = if profile.is_thermal() {
        render_thermal_body(order, &totals)
    } else {
        render_page_body(order, &totals)
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Invoice {}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n<script>window.addEventListener('load', function () {{ window.print(); }});</script>\n</body>\n</html>\n",
        html_escape(&order_ref(&order.id)),
        stylesheet(profile),
        body,
    )
}

fn stylesheet(profile: PaperProfile) -> String {
    let base = if profile.is_thermal() {
        "body { font-family: 'Courier New', monospace; font-size: 11px; margin: 0 auto; }\n\
         .receipt__row { display: flex; justify-content: space-between; }\n\
         .receipt__rule { border-top: 1px dashed #000; margin: 4px 0; }\n\
         .receipt__center { text-align: center; }"
    } else {
        "body { font-family: Arial, Helvetica, sans-serif; font-size: 13px; color: #111; margin: 0 auto; }\n\
         table { width: 100%; border-collapse: collapse; margin-top: 12px; }\n\
         th, td { border: 1px solid #555; padding: 6px 8px; text-align: left; }\n\
         th { background: #f0f0f0; }\n\
         td.num, th.num { text-align: right; }\n\
         .invoice__header { display: flex; justify-content: space-between; align-items: baseline; }\n\
         .invoice__totals { margin-top: 12px; margin-left: auto; width: 45%; }\n\
         .invoice__totals td { border: none; padding: 3px 8px; }\n\
         .invoice__grand td { border-top: 2px solid #111; font-weight: bold; }"
    };
    format!(
        "@page {{ size: {}; margin: {}; }}\nbody {{ width: {}; }}\n{}",
        profile.page_size_css(),
        if profile.is_thermal() { "2mm" } else { "12mm" },
        profile.body_width_css(),
        base,
    )
}

/// Narrow monospaced receipt with abbreviated fields.
fn render_thermal_body(order: &Order, totals: &InvoiceTotals) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"receipt\">\n");
    out.push_str("<div class=\"receipt__center\"><strong>ELECKYO</strong></div>\n");
    out.push_str(&format!(
        "<div class=\"receipt__center\">{}</div>\n",
        html_escape(&order_ref(&order.id))
    ));
    out.push_str(&format!(
        "<div class=\"receipt__center\">{}</div>\n",
        format_optional_datetime(order.created_at.as_ref())
    ));
    if !order.customer_details.name.is_empty() {
        out.push_str(&format!(
            "<div>{}</div>\n",
            html_escape(&order.customer_details.name)
        ));
    }
    out.push_str("<div class=\"receipt__rule\"></div>\n");
    for item in &order.ordered_items {
        out.push_str(&format!(
            "<div class=\"receipt__row\"><span>{} x{}</span><span>{}</span></div>\n",
            html_escape(&item.item_name),
            item.quantity,
            format_inr(item.line_total()),
        ));
    }
    out.push_str("<div class=\"receipt__rule\"></div>\n");
    out.push_str(&format!(
        "<div class=\"receipt__row\"><span>SUB</span><span>{}</span></div>\n",
        format_inr(totals.subtotal)
    ));
    out.push_str(&format!(
        "<div class=\"receipt__row\"><span>GST</span><span>{}</span></div>\n",
        format_inr(totals.tax)
    ));
    out.push_str(&format!(
        "<div class=\"receipt__row\"><span>SHIP</span><span>{}</span></div>\n",
        format_shipping(totals.shipping)
    ));
    out.push_str(&format!(
        "<div class=\"receipt__row\"><strong>TOTAL</strong><strong>{}</strong></div>\n",
        format_inr(totals.total)
    ));
    out.push_str("<div class=\"receipt__rule\"></div>\n");
    out.push_str("<div class=\"receipt__center\">Thank you for shopping!</div>\n");
    out.push_str("</div>");
    out
}

/// Full itemized invoice for page-size profiles.
fn render_page_body(order: &Order, totals: &InvoiceTotals) -> String {
    let customer = &order.customer_details;
    let mut rows = String::new();
    for item in &order.ordered_items {
        rows.push_str(&format!(
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            html_escape(&item.item_name),
            item.quantity,
            format_inr(item.unit_price),
            format_inr(item.line_total()),
        ));
    }

    format!(
        "<div class=\"invoice\">\n\
         <div class=\"invoice__header\">\n\
         <h1>ELECKYO</h1>\n\
         <div><strong>Invoice {order_ref}</strong><br>{date}</div>\n\
         </div>\n\
         <div class=\"invoice__customer\">\n\
         <strong>Billed to</strong><br>\n\
         {name}<br>{email}<br>{phone}<br>{address}\n\
         </div>\n\
         <table>\n\
         <thead><tr><th>Item</th><th class=\"num\">Qty</th><th class=\"num\">Unit price</th><th class=\"num\">Amount</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n\
         </table>\n\
         <table class=\"invoice__totals\">\n\
         <tr><td>Subtotal</td><td class=\"num\">{subtotal}</td></tr>\n\
         <tr><td>GST (18%)</td><td class=\"num\">{tax}</td></tr>\n\
         <tr><td>Shipping</td><td class=\"num\">{shipping}</td></tr>\n\
         <tr class=\"invoice__grand\"><td>Grand total</td><td class=\"num\">{total}</td></tr>\n\
         </table>\n\
         </div>",
        order_ref = html_escape(&order_ref(&order.id)),
        date = format_optional_datetime(order.created_at.as_ref()),
        name = html_escape(&customer.name),
        email = html_escape(&customer.email),
        phone = html_escape(&customer.phone),
        address = html_escape(&customer.address),
        rows = rows,
        subtotal = format_inr(totals.subtotal),
        tax = format_inr(totals.tax),
        shipping = format_shipping(totals.shipping),
        total = format_inr(totals.total),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_order() -> Order {
        serde_json::from_str(
            r#"{
                "_id": "abc123",
                "createdAt": "2026-01-15T10:00:00Z",
                "customerDetails": { "name": "J. Doe" },
                "orderedItems": [
                    { "itemName": "Widget", "unitPrice": 100, "quantity": 2, "totalPrice": 200 }
                ],
                "paymentSummary": { "subtotal": 200, "shipping": 0, "tax": 36, "total": 236 }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_totals_from_payment_summary() {
        let totals = InvoiceTotals::from_order(&widget_order());
        assert_eq!(totals.subtotal, 200.0);
        assert_eq!(totals.tax, 36.0);
        assert_eq!(totals.shipping, 0.0);
        assert_eq!(totals.total, 236.0);
    }

    #[test]
    fn test_totals_recomputed_when_summary_absent() {
        let order: Order = serde_json::from_str(
            r#"{
                "_id": "o2",
                "orderedItems": [
                    { "itemName": "Kettle", "unitPrice": 100, "quantity": 1 }
                ]
            }"#,
        )
        .unwrap();
        let totals = InvoiceTotals::from_order(&order);
        assert_eq!(totals.subtotal, 100.0);
        assert!((totals.tax - 18.0).abs() < 1e-9);
        assert!((totals.total - 118.0).abs() < 1e-9);
    }

    #[test]
    fn test_a4_invoice_matches_example_scenario() {
        let html = render_invoice(&widget_order(), PaperProfile::A4);
        assert!(html.contains("₹200.00"), "subtotal line");
        assert!(html.contains("GST (18%)"));
        assert!(html.contains("₹36.00"), "computed GST line");
        assert!(html.contains("FREE"), "zero shipping renders specially");
        assert!(html.contains("₹236.00"), "grand total");
        assert_eq!(html.matches("<tr><td>Widget</td>").count(), 1);
        assert!(html.contains("<td class=\"num\">2</td>"), "quantity 2");
        assert!(html.contains("#ABC123"));
    }

    #[test]
    fn test_empty_order_still_renders() {
        let order: Order = serde_json::from_str(r#"{ "_id": "bare" }"#).unwrap();
        for profile in PaperProfile::all() {
            let html = render_invoice(&order, profile);
            assert!(html.contains("₹0.00"), "{profile:?} zero totals");
            assert!(!html.contains("<tr><td></td>"), "{profile:?} no item rows");
        }
    }

    #[test]
    fn test_thermal_layout_is_abbreviated() {
        let html = render_invoice(&widget_order(), PaperProfile::Thermal58);
        assert!(html.contains("monospace"));
        assert!(html.contains("Widget x2"));
        assert!(html.contains("SUB"));
        assert!(html.contains("TOTAL"));
        assert!(!html.contains("Billed to"));
        assert!(html.contains("size: 58mm auto"));
    }

    #[test]
    fn test_customer_data_is_escaped() {
        let mut order = widget_order();
        order.customer_details.name = "<script>alert(1)</script>".to_string();
        let html = render_invoice(&order, PaperProfile::A4);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
