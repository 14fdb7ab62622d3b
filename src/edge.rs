//! Edge language routing.
//!
//! Decides, for an incoming page request, whether to pass it through untouched
//! or to rewrite it to the Portuguese or English index page. Precedence for the
//! language is `?lang=` > `lang` cookie > geo country (non-BR means English).
//! The decision is plain data so the Pages function can apply it with whatever
//! fetch API it has.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::lang::Lang;

const STATIC_EXTENSIONS: &[&str] = &[
    "css", "js", "png", "jpg", "jpeg", "gif", "svg", "ico", "pdf", "woff", "woff2", "ttf", "html",
];

const INDEX_FILES: &[&str] = &["/index.html", "/index-en.html"];

const ROUTE_PATHS: &[&str] = &[
    "/",
    "/opensource",
    "/projetos",
    "/projects",
    "/destaques",
    "/highlights",
    "/sobre",
    "/about",
    "/experiencia",
    "/experience",
    "/contato",
    "/contact",
];

pub const DEFAULT_COUNTRY: &str = "BR";
const COOKIE_MAX_AGE: u32 = 31_536_000;

/// The parts of a request the router looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeRequest {
    pub path: String,
    /// Raw value of the `lang` query parameter, if present.
    pub lang_param: Option<String>,
    /// Raw `Cookie` header.
    pub cookie: Option<String>,
    /// Geo country code from the edge; `None` falls back to [`DEFAULT_COUNTRY`].
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LangSource {
    Param,
    Cookie,
    Geo,
}

impl LangSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LangSource::Param => "param",
            LangSource::Cookie => "cookie",
            LangSource::Geo => "geo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum RouteDecision {
    /// Let the static asset server handle the request.
    Next,
    /// Serve `asset` instead and add `headers` to the response.
    Rewrite {
        asset: String,
        lang: Lang,
        source: LangSource,
        headers: Vec<(String, String)>,
    },
}

/// `lang` value from a `Cookie` header, if it names a known language.
pub fn cookie_lang(cookie: &str) -> Option<Lang> {
    cookie
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == "lang")
        .and_then(|(_, value)| Lang::from_code(value.trim()))
}

fn is_static_asset(path: &str) -> bool {
    path.rsplit_once('.')
        .map(|(_, ext)| STATIC_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn is_route_path(path: &str) -> bool {
    ROUTE_PATHS.iter().any(|route| {
        path == *route
            || path
                .strip_prefix(route)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Non-empty `?lang=` value; an empty parameter counts as absent.
fn lang_param(req: &EdgeRequest) -> Option<&str> {
    req.lang_param.as_deref().filter(|v| !v.is_empty())
}

/// Geo country, `BR` when the edge reports none.
pub fn country(req: &EdgeRequest) -> &str {
    req.country.as_deref().filter(|c| !c.is_empty()).unwrap_or(DEFAULT_COUNTRY)
}

/// Resolve the page language and where it came from. The source names the
/// first input present (param, cookie, geo) even when it holds an unknown
/// value and the language itself falls through to the next one.
pub fn resolve_lang(req: &EdgeRequest) -> (Lang, LangSource) {
    let param = lang_param(req);
    let cookie = req.cookie.as_deref().and_then(cookie_lang);
    let source = match (param, cookie) {
        (Some(_), _) => LangSource::Param,
        (None, Some(_)) => LangSource::Cookie,
        (None, None) => LangSource::Geo,
    };
    let lang = param
        .and_then(Lang::from_code)
        .or(cookie)
        .unwrap_or(if country(req) == DEFAULT_COUNTRY { Lang::Ptbr } else { Lang::En });
    (lang, source)
}

pub fn route(req: &EdgeRequest) -> RouteDecision {
    if is_static_asset(&req.path) || INDEX_FILES.contains(&req.path.as_str()) {
        return RouteDecision::Next;
    }
    if !is_route_path(&req.path) {
        return RouteDecision::Next;
    }

    let (lang, source) = resolve_lang(req);
    let country = country(req);
    let cookie_value = req.cookie.as_deref().and_then(cookie_lang);

    let mut headers = Vec::with_capacity(7);
    // Any non-empty `?lang=` pins the resolved language, even an unknown value.
    if lang_param(req).is_some() {
        headers.push((
            "Set-Cookie".to_string(),
            format!("lang={}; path=/; max-age={}; SameSite=Lax", lang.code(), COOKIE_MAX_AGE),
        ));
    }
    headers.push(("X-Language".to_string(), lang.locale().to_string()));
    headers.push(("X-Country".to_string(), country.to_string()));
    headers.push(("X-Lang-Source".to_string(), source.as_str().to_string()));
    headers.push((
        "X-Cookie-Lang".to_string(),
        cookie_value.map(|l| l.code()).unwrap_or("none").to_string(),
    ));
    headers.push(("Cache-Control".to_string(), "private, no-store, must-revalidate".to_string()));
    headers.push(("Vary".to_string(), "Accept-Language, Cookie".to_string()));

    log::debug!("edge rewrite {} -> {} ({})", req.path, lang.index_file(), source.as_str());
    RouteDecision::Rewrite { asset: lang.index_file().to_string(), lang, source, headers }
}

/// JS entry point for the Pages function: returns the decision as JSON.
#[wasm_bindgen]
pub fn route_request(
    url: &str,
    country: Option<String>,
    cookie: Option<String>,
) -> Result<String, JsValue> {
    let parsed = web_sys::Url::new(url)?;
    let req = EdgeRequest {
        path: parsed.pathname(),
        lang_param: parsed.search_params().get("lang"),
        cookie,
        country,
    };
    serde_json::to_string(&route(&req)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(path: &str) -> EdgeRequest {
        EdgeRequest { path: path.to_string(), ..Default::default() }
    }

    #[test]
    fn test_static_assets_pass_through() {
        assert_eq!(route(&req("/css/style.css")), RouteDecision::Next);
        assert_eq!(route(&req("/assets/cv.pdf")), RouteDecision::Next);
        assert_eq!(route(&req("/index-en.html")), RouteDecision::Next);
    }

    #[test]
    fn test_route_path_prefix_matching() {
        assert!(is_route_path("/"));
        assert!(is_route_path("/projects/edgeproxy"));
        assert!(!is_route_path("/projectsx"));
        assert!(!is_route_path("/blog"));
    }

    #[test]
    fn test_cookie_lang_parses_pairs() {
        assert_eq!(cookie_lang("a=1; lang=en; b=2"), Some(Lang::En));
        assert_eq!(cookie_lang("lang=ptbr"), Some(Lang::Ptbr));
        assert_eq!(cookie_lang("xlang=en"), None);
        assert_eq!(cookie_lang("lang=fr"), None);
    }
}
