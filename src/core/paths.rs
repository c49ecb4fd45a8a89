use std::path::{Component, Path, PathBuf};

/// Rewrites install paths under a staging root ("DESTDIR") when one is
/// configured. The input is joined onto the working directory first, so an
/// absolute path passes through the join unchanged while a relative one is
/// anchored, then the result is re-rooted under the staging root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    destdir: Option<PathBuf>,
    cwd: PathBuf,
}

impl PathResolver {
    pub fn new(destdir: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self { destdir, cwd }
    }

    pub fn is_staged(&self) -> bool {
        self.destdir.is_some()
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.destdir {
            None => path.to_path_buf(),
            Some(root) => {
                let absolute = self.cwd.join(path);
                let mut staged = root.clone();
                for component in absolute.components() {
                    match component {
                        Component::RootDir | Component::Prefix(_) => {}
                        other => staged.push(other),
                    }
                }
                staged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_staging_root_is_identity() {
        let resolver = PathResolver::new(None, PathBuf::from("/build"));
        assert_eq!(
            resolver.resolve(Path::new("/usr/local/xdg/autostart")),
            PathBuf::from("/usr/local/xdg/autostart")
        );
        assert!(!resolver.is_staged());
    }

    #[test]
    fn test_resolve_absolute_path_under_staging_root() {
        let resolver =
            PathResolver::new(Some(PathBuf::from("/stage")), PathBuf::from("/build"));
        assert_eq!(
            resolver.resolve(Path::new("/usr/local/xdg/autostart")),
            PathBuf::from("/stage/usr/local/xdg/autostart")
        );
        assert!(resolver.is_staged());
    }

    #[test]
    fn test_resolve_relative_path_is_anchored_to_cwd() {
        let resolver =
            PathResolver::new(Some(PathBuf::from("/stage")), PathBuf::from("/build/obj"));
        assert_eq!(
            resolver.resolve(Path::new("share/applications")),
            PathBuf::from("/stage/build/obj/share/applications")
        );
    }
}
