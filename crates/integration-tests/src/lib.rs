//! Shared fixtures for the end-to-end suites.

use std::sync::Arc;

use rb_auth_simple::SimpleCredentialVerifier;
use rb_core::{BlogContext, ContentStore, Post};

/// A fresh client: logged out, seeded store, `admin`/`admin123` account.
pub fn fixture_blog() -> BlogContext {
    let verifier = SimpleCredentialVerifier::fixture().expect("fixture account hashes");
    BlogContext::new(Arc::new(verifier), ContentStore::seeded())
}

/// Same as [`fixture_blog`], already logged in as `admin`.
pub fn logged_in_blog() -> BlogContext {
    let mut blog = fixture_blog();
    blog.login("admin", "admin123").expect("fixture login");
    blog
}

pub fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}
