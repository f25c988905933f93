//! Paths of files served from the `public/` assets dir.

pub const AVATAR: &str = "/avatar.svg";
pub const FAVICON: &str = "/favicon.svg";

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_assets_exist() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [AVATAR, FAVICON] {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "missing asset {}", path.display());
        }
    }
}
