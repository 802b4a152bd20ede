use pathdiff::diff_paths;
use std::path::{Component, Path, PathBuf};

/// `path` relative to `base` when it lives beneath it, otherwise `path` as is.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    match diff_paths(path, base) {
        Some(rel_path) if !escapes(&rel_path) && !rel_path.as_os_str().is_empty() => rel_path,
        _ => path.to_path_buf(),
    }
}

fn escapes(rel_path: &Path) -> bool {
    rel_path
        .components()
        .any(|component| component == Component::ParentDir)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    macro_rules! relative_to_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (path, base, expected) = $value;
                let path: PathBuf = path.into();
                let base: PathBuf = base.into();
                let expected: PathBuf = expected.into();

                let result = super::relative_to(&path, &base);
                assert_eq!(result, expected);
            }
        )*
        }
    }

    relative_to_tests! {
        relative_to_0: ("/work/app/components/Foo.tsx", "/work", "app/components/Foo.tsx"),
        relative_to_1: ("/work/app/page.tsx", "/work/app", "page.tsx"),
        relative_to_2: ("/elsewhere/app/page.tsx", "/work", "/elsewhere/app/page.tsx"),
        relative_to_3: ("app/page.tsx", "/work", "app/page.tsx"),
        relative_to_4: ("/work", "/work", "/work"),
    }
}
