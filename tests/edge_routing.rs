// Integration tests (native) for the edge language router.

use portfolio_os::Lang;
use portfolio_os::edge::{EdgeRequest, LangSource, RouteDecision, route};

fn request(path: &str, param: Option<&str>, cookie: Option<&str>, country: Option<&str>) -> EdgeRequest {
    EdgeRequest {
        path: path.to_string(),
        lang_param: param.map(str::to_string),
        cookie: cookie.map(str::to_string),
        country: country.map(str::to_string),
    }
}

fn header<'a>(decision: &'a RouteDecision, name: &str) -> Option<&'a str> {
    match decision {
        RouteDecision::Rewrite { headers, .. } => headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str()),
        RouteDecision::Next => None,
    }
}

fn target(decision: &RouteDecision) -> Option<(&str, Lang, LangSource)> {
    match decision {
        RouteDecision::Rewrite { asset, lang, source, .. } => Some((asset.as_str(), *lang, *source)),
        RouteDecision::Next => None,
    }
}

#[test]
fn param_beats_cookie_beats_geo() {
    let d = route(&request("/", Some("en"), Some("lang=ptbr"), Some("BR")));
    assert_eq!(target(&d), Some(("/index-en.html", Lang::En, LangSource::Param)));

    let d = route(&request("/", None, Some("lang=ptbr"), Some("US")));
    assert_eq!(target(&d), Some(("/index.html", Lang::Ptbr, LangSource::Cookie)));

    let d = route(&request("/", None, None, Some("US")));
    assert_eq!(target(&d), Some(("/index-en.html", Lang::En, LangSource::Geo)));

    // no geo information means Brazil
    let d = route(&request("/", None, None, None));
    assert_eq!(target(&d), Some(("/index.html", Lang::Ptbr, LangSource::Geo)));
}

#[test]
fn query_param_sets_a_year_long_cookie() {
    let d = route(&request("/about", Some("en"), None, Some("BR")));
    assert_eq!(
        header(&d, "Set-Cookie"),
        Some("lang=en; path=/; max-age=31536000; SameSite=Lax")
    );
    assert_eq!(header(&d, "X-Language"), Some("en"));
    assert_eq!(header(&d, "X-Lang-Source"), Some("param"));
    assert_eq!(header(&d, "X-Cookie-Lang"), Some("none"));

    let d = route(&request("/about", None, Some("lang=en"), Some("BR")));
    assert_eq!(header(&d, "Set-Cookie"), None);
    assert_eq!(header(&d, "X-Cookie-Lang"), Some("en"));
}

#[test]
fn rewrites_are_never_cached() {
    let d = route(&request("/contato", None, None, Some("PT")));
    assert_eq!(header(&d, "Cache-Control"), Some("private, no-store, must-revalidate"));
    assert_eq!(header(&d, "Vary"), Some("Accept-Language, Cookie"));
    assert_eq!(header(&d, "X-Country"), Some("PT"));
    assert_eq!(header(&d, "X-Language"), Some("en"));
}

#[test]
fn section_sub_paths_are_rewritten_but_other_pages_are_not() {
    assert!(target(&route(&request("/projects/edgeproxy", None, None, None))).is_some());
    assert!(target(&route(&request("/experiencia", None, None, None))).is_some());
    assert_eq!(route(&request("/desktop.html", None, None, None)), RouteDecision::Next);
    assert_eq!(route(&request("/js/main.js", None, None, None)), RouteDecision::Next);
    assert_eq!(route(&request("/blog", None, None, None)), RouteDecision::Next);
}

#[test]
fn decision_serializes_for_the_pages_function() {
    let json = serde_json::to_value(route(&request("/", Some("en"), None, None))).unwrap();
    assert_eq!(json["action"], "rewrite");
    assert_eq!(json["asset"], "/index-en.html");
    assert_eq!(json["lang"], "en");
    assert_eq!(json["source"], "param");

    let json = serde_json::to_value(route(&request("/style.css", None, None, None))).unwrap();
    assert_eq!(json["action"], "next");
}

#[test]
fn an_unknown_param_still_reports_param_as_the_source() {
    let d = route(&request("/", Some("fr"), Some("lang=en"), Some("BR")));
    assert_eq!(target(&d), Some(("/index-en.html", Lang::En, LangSource::Param)));
    assert_eq!(header(&d, "X-Lang-Source"), Some("param"));
    assert_eq!(
        header(&d, "Set-Cookie"),
        Some("lang=en; path=/; max-age=31536000; SameSite=Lax")
    );
}

#[test]
fn an_empty_param_is_ignored() {
    let d = route(&request("/sobre", Some(""), None, Some("BR")));
    assert_eq!(target(&d), Some(("/index.html", Lang::Ptbr, LangSource::Geo)));
    assert_eq!(header(&d, "Set-Cookie"), None);
    assert_eq!(header(&d, "X-Lang-Source"), Some("geo"));
}

#[test]
fn an_empty_country_means_brazil() {
    let d = route(&request("/", None, None, Some("")));
    assert_eq!(target(&d), Some(("/index.html", Lang::Ptbr, LangSource::Geo)));
    assert_eq!(header(&d, "X-Country"), Some("BR"));
    assert_eq!(header(&d, "X-Language"), Some("pt-BR"));
}
