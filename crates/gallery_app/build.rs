use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SidebarLink {
    id: String,
    label: String,
    href: String,
    style: String,
}

#[derive(Debug, Deserialize)]
struct GalleryManifest {
    schema_version: u32,
    title: String,
    version: String,
    tagline: String,
    links: Vec<SidebarLink>,
}

const LINK_STYLES: [(&str, &str); 3] = [
    ("primary", "LinkStyle::Primary"),
    ("button", "LinkStyle::Button"),
    ("external", "LinkStyle::External"),
];

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("gallery.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: GalleryManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if manifest.title.trim().is_empty() {
        panic!("manifest {} has an empty title", path.display());
    }

    let mut links = String::new();
    for link in &manifest.links {
        if !link.href.starts_with("https://") {
            panic!("link `{}` must use an https href, found {}", link.id, link.href);
        }
        let style = LINK_STYLES
            .iter()
            .find(|(token, _)| *token == link.style)
            .map(|(_, path)| *path)
            .unwrap_or_else(|| panic!("link `{}` has unknown style `{}`", link.id, link.style));
        links.push_str(&format!(
            "    SidebarLink {{ id: {:?}, label: {:?}, href: {:?}, style: {style} }},\n",
            link.id, link.label, link.href
        ));
    }

    let generated = format!(
        "/// Gallery title shown in the sidebar and document head.\n\
pub const GALLERY_TITLE: &str = {:?};\n\
/// Icon set version shown beside the title.\n\
pub const GALLERY_VERSION: &str = {:?};\n\
/// One-line description of the icon set.\n\
pub const GALLERY_TAGLINE: &str = {:?};\n\
/// Sidebar links, in display order.\n\
pub const SIDEBAR_LINKS: &[SidebarLink] = &[\n{links}];\n",
        manifest.title, manifest.version, manifest.tagline
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("gallery_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
