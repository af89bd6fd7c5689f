//! Session cookie attributes

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::constants::SESSION_COOKIE;

/// `token` cookie carrying a signed session
pub(super) fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    with_attributes(Cookie::new(SESSION_COOKIE, token), production)
}

/// Expired `token` cookie; attributes must match the issued one
pub(super) fn removal_cookie(production: bool) -> Cookie<'static> {
    let mut cookie = with_attributes(Cookie::new(SESSION_COOKIE, ""), production);
    cookie.make_removal();
    cookie
}

fn with_attributes(mut cookie: Cookie<'static>, production: bool) -> Cookie<'static> {
    let same_site = if production {
        SameSite::None
    } else {
        SameSite::Strict
    };

    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(production);
    cookie.set_same_site(same_site);
    cookie
}
