use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::model::{CompanyIdentity, Inquiry, Sender};
use crate::domain::shared::value_objects::Locale;
use crate::domain::shopping_list::model::ShoppingListItem;

const SUBJECT: &str = "Product Inquiry";

/// RFC 3986 unreserved characters stay literal; everything else is
/// escaped so line breaks and non-ASCII names survive the mailto query.
const MAILTO_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One itemized line: localized name, labeled reference code, quantity.
pub fn item_line(item: &ShoppingListItem, locale: Locale) -> String {
    format!(
        "- {} ({}-{}) x{}",
        item.product.display_name(locale),
        locale.reference_label(),
        item.product.reference,
        item.quantity
    )
}

/// Assembles the fixed-template message. Missing identity renders as an
/// absent block rather than failing; composition itself cannot error.
pub fn compose(
    items: &[ShoppingListItem],
    identity: Option<&CompanyIdentity>,
    sender: &Sender,
    locale: Locale,
) -> Inquiry {
    let item_lines = items
        .iter()
        .map(|item| item_line(item, locale))
        .collect::<Vec<_>>()
        .join("\n");

    let identity_block = match identity {
        Some(identity) => format!(
            "Company: {}\nVAT: {}\n\n",
            identity.company_name, identity.vat_number
        ),
        None => String::new(),
    };

    let signature = match sender {
        Sender::User { email } => email.as_str(),
        Sender::Guest => "Guest",
    };

    let body = format!(
        "Hello,\n\n{identity_block}I'm interested in the following products:\n\n{item_lines}\n\nPlease provide me with more information about availability and pricing.\n\nThank you.\n{signature}"
    );

    Inquiry {
        subject: SUBJECT.to_string(),
        body,
    }
}

/// Percent-encodes subject and body into a mailto URI for the host
/// environment's mail client. This system never sends anything itself.
pub fn mailto_uri(to: &str, inquiry: &Inquiry) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        utf8_percent_encode(&inquiry.subject, MAILTO_SET),
        utf8_percent_encode(&inquiry.body, MAILTO_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;

    fn item(id: u64, quantity: u32) -> ShoppingListItem {
        let mut item = ShoppingListItem::new(product(id, 10));
        item.quantity = quantity;
        item
    }

    #[test]
    fn should_render_item_line_with_reference_and_quantity() {
        let line = item_line(&item(7, 3), Locale::English);

        assert_eq!(line, "- Product 7 (REF-SKU-0007) x3");
    }

    #[test]
    fn should_render_arabic_name_when_locale_arabic() {
        let mut it = item(7, 1);
        it.product.name_ar = "زيت".to_string();

        let line = item_line(&it, Locale::Arabic);

        assert!(line.contains("زيت"));
        assert!(line.contains("مرجع-SKU-0007"));
    }

    #[test]
    fn should_embed_company_identity_and_items_in_body() {
        let identity = CompanyIdentity {
            company_name: "Acme".to_string(),
            vat_number: "FR40303265045".to_string(),
        };

        let inquiry = compose(
            &[item(7, 3)],
            Some(&identity),
            &Sender::User {
                email: "buyer@acme.example".to_string(),
            },
            Locale::English,
        );

        assert_eq!(inquiry.subject, "Product Inquiry");
        assert!(inquiry.body.contains("Company: Acme"));
        assert!(inquiry.body.contains("VAT: FR40303265045"));
        assert!(inquiry.body.contains("- Product 7 (REF-SKU-0007) x3"));
        assert!(inquiry.body.contains("availability and pricing"));
        assert!(inquiry.body.ends_with("buyer@acme.example"));
    }

    #[test]
    fn should_compose_without_identity_and_sign_as_guest() {
        let inquiry = compose(&[item(1, 1)], None, &Sender::Guest, Locale::English);

        assert!(!inquiry.body.contains("Company:"));
        assert!(inquiry.body.starts_with("Hello,\n\nI'm interested"));
        assert!(inquiry.body.ends_with("Guest"));
    }

    #[test]
    fn should_compose_empty_list_without_failing() {
        let inquiry = compose(&[], None, &Sender::Guest, Locale::English);

        assert!(inquiry.body.contains("I'm interested in the following products:"));
    }

    #[test]
    fn should_percent_encode_subject_and_body() {
        let inquiry = Inquiry {
            subject: "Product Inquiry".to_string(),
            body: "Hello,\nA&B x2".to_string(),
        };

        let uri = mailto_uri("sales@example.com", &inquiry);

        assert!(uri.starts_with("mailto:sales@example.com?subject=Product%20Inquiry&body="));
        assert!(uri.contains("Hello%2C%0AA%26B%20x2"));
    }
}
