//! Root document component - the complete HTML page

use leptos::prelude::*;

use crate::motion::MOTION_SCRIPT;
use crate::styles::{CSP, GLOBAL_CSS, SITE_CSS};
use crate::DocumentMeta;

/// The complete HTML document around a page body
#[component]
pub fn PageDocument(meta: DocumentMeta, children: Children) -> impl IntoView {
    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{meta.title}</title>
                <style>{GLOBAL_CSS}</style>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                {children()}
                <script>{MOTION_SCRIPT}</script>
            </body>
        </html>
    }
}
