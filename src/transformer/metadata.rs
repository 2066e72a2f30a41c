//! Per-browser placeholder substitution in metadata files

use crate::config::{
    EXTENSION_ID_PLACEHOLDER, FIREFOX_INSTALL_RDF, FIREFOX_PACKAGE_JSON, MANIFEST_FILE,
    NAME_POSTFIX_PLACEHOLDER, SAFARI_INFO_PLIST, UPDATE_FROM_GALLERY_PLACEHOLDER,
    UPDATE_URL_PLACEHOLDER, UPDATE_URL_PLIST_PLACEHOLDER, VERSION_PLACEHOLDER,
};
use crate::error::BuildResult;
use crate::models::{Browser, MetadataParams};
use crate::utils::{read_text, write_text};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct MetadataPatcher {
    params: MetadataParams,
}

impl MetadataPatcher {
    pub fn new(params: &MetadataParams) -> Self {
        Self {
            params: params.clone(),
        }
    }

    /// Patch the metadata files of `browser` under `root`.
    ///
    /// Returns the rewritten files relative to `root`.
    pub fn patch(&self, root: &Path, browser: Browser) -> BuildResult<Vec<PathBuf>> {
        match browser {
            Browser::Chromium | Browser::Edge => {
                self.rewrite(root, MANIFEST_FILE, |c| self.render_chromium_manifest(c))?;
                Ok(vec![PathBuf::from(MANIFEST_FILE)])
            }
            Browser::Safari => {
                self.rewrite(root, SAFARI_INFO_PLIST, |c| self.render_safari_plist(c))?;
                Ok(vec![PathBuf::from(SAFARI_INFO_PLIST)])
            }
            Browser::Firefox | Browser::FirefoxLegacy => {
                self.rewrite(root, FIREFOX_INSTALL_RDF, |c| self.render_install_rdf(c))?;
                self.rewrite(root, FIREFOX_PACKAGE_JSON, |c| self.render_package_json(c))?;
                Ok(vec![
                    PathBuf::from(FIREFOX_INSTALL_RDF),
                    PathBuf::from(FIREFOX_PACKAGE_JSON),
                ])
            }
        }
    }

    fn rewrite(&self, root: &Path, name: &str, render: impl Fn(&str) -> String) -> BuildResult<()> {
        let path = root.join(name);
        let content = read_text(&path)?;
        debug!(file = %path.display(), "Substituting placeholders");
        write_text(&path, &render(&content))
    }

    /// `manifest.json`: optional `update_url` key, then the version.
    pub fn render_chromium_manifest(&self, content: &str) -> String {
        let mut content = content.trim().to_string();
        if let Some(update_url) = &self.params.update_url {
            let body = content.strip_suffix('}').unwrap_or(&content).trim();
            content = format!("{},\r\n\r\n\t\"update_url\": \"{}\"\r\n}}", body, update_url);
        }
        content.replace(VERSION_PLACEHOLDER, &self.params.version)
    }

    pub fn render_safari_plist(&self, content: &str) -> String {
        let update_from_gallery = match &self.params.extension_id {
            Some(id) if id.contains("beta") => "false",
            _ => "true",
        };
        let content = replace_opt(content, EXTENSION_ID_PLACEHOLDER, self.params.extension_id.as_deref());
        let content = content.replace(VERSION_PLACEHOLDER, &self.params.version);
        let content = content.replace(
            UPDATE_URL_PLIST_PLACEHOLDER,
            self.params.update_url.as_deref().unwrap_or(""),
        );
        let content = content.replace(UPDATE_FROM_GALLERY_PLACEHOLDER, update_from_gallery);
        replace_opt(&content, NAME_POSTFIX_PLACEHOLDER, self.params.extension_name_postfix.as_deref())
    }

    pub fn render_install_rdf(&self, content: &str) -> String {
        let update_url = self
            .params
            .update_url
            .as_ref()
            .map(|url| format!("<em:updateURL>{}</em:updateURL>", url))
            .unwrap_or_default();
        let content = content.trim().replace(UPDATE_URL_PLACEHOLDER, &update_url);
        let content = content.replace(VERSION_PLACEHOLDER, &self.params.version);
        replace_opt(&content, EXTENSION_ID_PLACEHOLDER, self.params.extension_id.as_deref())
    }

    pub fn render_package_json(&self, content: &str) -> String {
        let content = content.replace(VERSION_PLACEHOLDER, &self.params.version);
        let content = replace_opt(&content, EXTENSION_ID_PLACEHOLDER, self.params.extension_id.as_deref());
        replace_opt(&content, NAME_POSTFIX_PLACEHOLDER, self.params.extension_name_postfix.as_deref())
    }
}

/// Substitute when a value is given; otherwise leave the placeholder in place.
fn replace_opt(content: &str, placeholder: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => content.replace(placeholder, value),
        None => content.to_string(),
    }
}
