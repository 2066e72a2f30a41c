//! Fixed paths, placeholders and text templates used by the build steps.
//!
//! These are hand-maintained: generated files must match them byte for byte,
//! including the CRLF line endings.

/// Manifest listing every file shipped with the extension.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Background page whose `<script>` tags define the API build input order.
pub const BACKGROUND_PAGE: &str = "background.html";

/// Library directory pruned by the API build.
pub const LIB_DIR: &str = "lib";

/// Aggregate written by the API build, relative to the build root.
pub const API_JS_FILE: &str = "lib/adguard-api.js";

/// Generated list of bundled JS injection rules.
pub const LOCAL_SCRIPT_RULES_FILE: &str = "lib/filter/rules/local-script-rules.js";

/// Content script patched on non-release branches.
pub const PRELOAD_FILE: &str = "lib/content-script/preload.js";

pub const SAFARI_INFO_PLIST: &str = "Info.plist";
pub const FIREFOX_INSTALL_RDF: &str = "install.rdf";
pub const FIREFOX_PACKAGE_JSON: &str = "package.json";

pub const VERSION_PLACEHOLDER: &str = "${version}";
pub const EXTENSION_ID_PLACEHOLDER: &str = "${extensionId}";
/// `install.rdf` spelling.
pub const UPDATE_URL_PLACEHOLDER: &str = "${updateUrl}";
/// `Info.plist` spelling.
pub const UPDATE_URL_PLIST_PLACEHOLDER: &str = "${updateURL}";
pub const NAME_POSTFIX_PLACEHOLDER: &str = "${extensionNamePostfix}";
pub const UPDATE_FROM_GALLERY_PLACEHOLDER: &str = "${updateFromGallery}";

/// Phrase identifying the project license comment inside a source file.
pub const LICENSE_MARKER: &str = "This file is part of Adguard Browser Extension";

pub const LICENSE_BANNER: &str = concat!(
    "/**\r\n",
    "  * This file is part of Adguard Browser Extension (https://github.com/AdguardTeam/AdguardBrowserExtension).\r\n",
    "  *\r\n",
    "  * Adguard Browser Extension is free software: you can redistribute it and/or modify\r\n",
    "  * it under the terms of the GNU Lesser General Public License as published by\r\n",
    "  * the Free Software Foundation, either version 3 of the License, or\r\n",
    "  * (at your option) any later version.\r\n",
    "  *\r\n",
    "  * Adguard Browser Extension is distributed in the hope that it will be useful,\r\n",
    "  * but WITHOUT ANY WARRANTY; without even the implied warranty of\r\n",
    "  * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the\r\n",
    "  * GNU Lesser General Public License for more details.\r\n",
    "  *\r\n",
    "  * You should have received a copy of the GNU Lesser General Public License\r\n",
    "  * along with Adguard Browser Extension.  If not, see <http://www.gnu.org/licenses/>.\r\n",
    "  */",
);

pub const API_WRAPPER_OPEN: &str = "(function (window, undefined) {\r\n";
pub const API_WRAPPER_CLOSE: &str = "\r\n})(window);";

/// Entry page written over `background.html` after the API build.
pub const API_BACKGROUND_PAGE: &str = concat!(
    "<!DOCTYPE html>\r\n",
    "<html>\r\n",
    "<head>\r\n",
    "<script type=\"text/javascript\" src=\"lib/adguard-api.js\"></script>\r\n",
    "</head>\r\n",
    "</html>",
);

/// Header of the local script rules file; the rule statements follow it.
pub const SCRIPT_RULES_HEADER: &str = concat!(
    "/**\r\n",
    " * By the rules of AMO and addons.opera.com we cannot use remote scripts\r\n",
    " * (and our JS injection rules could be counted as remote scripts).\r\n",
    " *\r\n",
    " * So what we do:\r\n",
    " * 1. We gather all current JS rules in the DEFAULT_SCRIPT_RULES object\r\n",
    " * 2. We disable JS rules got from remote server\r\n",
    " * 3. We allow only custom rules got from the User filter (which user creates manually)\r\n",
    " *    or from this DEFAULT_SCRIPT_RULES object\r\n",
    " */\r\n",
    "adguard.rules.DEFAULT_SCRIPT_RULES = Object.create(null);\r\n",
);

/// Global table the generated rule statements assign into.
pub const SCRIPT_RULES_TABLE: &str = "adguard.rules.DEFAULT_SCRIPT_RULES";

/// Clause in the preload script that blocks remote JS rules in Firefox.
pub const PRELOAD_FIREFOX_CLAUSE: &str = "if (!isFirefox && !isOpera) {";
pub const PRELOAD_REPLACEMENT_CLAUSE: &str = "if (!isOpera) {";

/// Branches that allow remote JS rules in Firefox builds.
pub const REMOTE_RULES_BRANCHES: &[&str] = &["beta", "dev", "legacy", "dev-legacy"];
