//! Test fixtures for Confluence API responses
//!
//! Realistic `rest/api/content/{id}?expand=body.storage` payloads for pages
//! holding translation tables.

use serde_json::json;

fn page_response(id: &str, title: &str, storage: &str) -> serde_json::Value {
  json!({
    "id": id,
    "type": "page",
    "status": "current",
    "title": title,
    "body": {
      "storage": {
        "value": storage,
        "representation": "storage"
      }
    },
    "_links": {
      "webui": format!("/wiki/spaces/I18N/pages/{id}"),
      "self": format!("https://example.atlassian.net/wiki/rest/api/content/{id}")
    }
  })
}

// The two-row table used throughout the docs: en has an empty value.
pub fn greeting_table_response() -> serde_json::Value {
  page_response(
    "100001",
    "Greetings",
    "<p>Keys are stable, do not rename them.</p>\
     <table class=\"wrapped\"><colgroup><col /><col /><col /></colgroup><tbody>\
     <tr><th>TechnicalId</th><th>en</th><th>fr</th></tr>\
     <tr><td>ID1</td><td>Hello</td><td>Bonjour</td></tr>\
     <tr><td>ID2</td><td /><td>Au revoir</td></tr>\
     </tbody></table>",
  )
}

// Table with ignored columns, rich cell markup and HTML entities.
pub fn checkout_table_response() -> serde_json::Value {
  page_response(
    "100002",
    "Checkout translations",
    r#"<ac:structured-macro ac:name="info" ac:schema-version="1"><ac:rich-text-body><p>Owned by the web team.</p></ac:rich-text-body></ac:structured-macro>
<table data-layout="full-width"><tbody>
<tr><th><p><strong>TechnicalId</strong></p></th><th><p>PageName</p></th><th><p>Image</p></th><th><p>de</p></th><th><p>fr</p></th></tr>
<tr><td><p>CART_TITLE</p></td><td><p>Cart</p></td><td><ac:image><ri:attachment ri:filename="cart.png" /></ac:image></td><td><p>Ihr Warenkorb</p></td><td><p>Votre panier</p></td></tr>
<tr><td><p>CART_EMPTY</p></td><td><p>Cart</p></td><td /><td><p>Ihr Warenkorb ist leer.<br />Jetzt einkaufen!</p></td><td><p>Votre panier est vide&nbsp;!</p></td></tr>
<tr><td><p>PAY_NOW</p></td><td><p>Payment</p></td><td /><td><p>Jetzt bezahlen</p></td><td><p>Payer maintenant &amp; r&eacute;server</p></td></tr>
</tbody></table>"#,
  )
}

// Page without any table.
pub fn page_without_table_response() -> serde_json::Value {
  page_response(
    "100003",
    "Release notes",
    "<h1>Release notes</h1><p>Nothing to translate here.</p>",
  )
}

// Response missing `body.storage`, as returned when `expand` is ignored.
pub fn page_without_storage_response() -> serde_json::Value {
  json!({
    "id": "100004",
    "type": "page",
    "status": "current",
    "title": "No body",
    "body": {}
  })
}
