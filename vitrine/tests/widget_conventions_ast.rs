use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const WIDGET_MODULES: [&str; 5] = ["mod", "event", "model", "reducer", "state"];
const PURE_MODULES: [&str; 4] = ["event", "model", "reducer", "state"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_widgets = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared_widgets.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module declaration '{}' must be pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            _ => {},
        }
    }

    let fs_widgets = subdirectories(&widgets_dir);
    if declared_widgets != fs_widgets {
        violations.push(format!(
            "{}: declared widgets {:?} do not match directories {:?}",
            mod_rs.display(),
            declared_widgets,
            fs_widgets
        ));
    }

    for widget in &declared_widgets {
        let widget_dir = widgets_dir.join(widget);
        for module in WIDGET_MODULES {
            let path = widget_dir.join(format!("{module}.rs"));
            if !path.is_file() {
                violations.push(format!(
                    "{}: widget must declare a '{module}' module",
                    widget_dir.display()
                ));
            }
        }

        for module in PURE_MODULES {
            let path = widget_dir.join(format!("{module}.rs"));
            if path.is_file() {
                validate_pure_module(&path, &mut violations);
            }
        }

        let view_dir = widget_dir.join("view");
        if view_dir.is_dir() {
            for path in rust_files(&view_dir) {
                if path.file_name().is_some_and(|name| name == "mod.rs") {
                    continue;
                }
                validate_view_file(&path, &mut violations);
            }
        }
    }

    for path in rust_files_recursive(&widgets_dir) {
        validate_imports(&path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_pure_module(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);

    if source.contains("crate::app::") {
        violations.push(format!(
            "{}: direct coupling to crate::app is forbidden",
            file_path.display()
        ));
    }

    for forbidden in [
        "log::",
        "std::fs::",
        "std::env::",
        "std::process::Command",
        "tokio::spawn",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", ".elapsed("] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let is_reducer = file_path
        .file_stem()
        .is_some_and(|stem| stem == "reducer");
    if !is_reducer && source.contains("Task::") {
        violations.push(format!(
            "{}: only reducers may build tasks",
            file_path.display()
        ));
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with file prefix '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

fn validate_imports(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse(file_path);
    let mut items: Vec<&Item> = file.items.iter().collect();

    // Inline modules, including tests, follow the same import rules.
    while let Some(item) = items.pop() {
        match item {
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            Item::Mod(item_mod) => {
                if let Some((_, nested)) = &item_mod.content {
                    items.extend(nested.iter());
                }
            },
            _ => {},
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn subdirectories(dir: &Path) -> BTreeSet<String> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    entries
        .map(|entry| {
            entry.unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
        })
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect()
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    let mut files: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .collect();
    files.sort();
    files
}

fn rust_files_recursive(dir: &Path) -> Vec<PathBuf> {
    let mut files = rust_files(dir);
    for sub in subdirectories(dir) {
        files.extend(rust_files_recursive(&dir.join(sub)));
    }
    files
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
