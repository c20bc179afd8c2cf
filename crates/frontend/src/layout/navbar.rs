use crate::shared::icons::icon;
use crate::shared::motion;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const LINKS: [(&str, &str, &str); 4] = [
    ("/", "dashboard", "Dashboard"),
    ("/productos", "products", "Productos"),
    ("/categorias", "categories", "Categorías"),
    ("/proveedores", "suppliers", "Proveedores"),
];

/// `/` matches only itself; other targets also match their sub-paths
fn is_active(current: &str, target: &str) -> bool {
    if target == "/" {
        return current == "/";
    }
    current == target
        || current
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let link_style = motion::transition_style("background-color", motion::DURATION_FAST_MS);

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                {icon("products")}
                <span>"Tienda Inventario"</span>
            </div>
            <ul class="navbar__links">
                {LINKS
                    .into_iter()
                    .map(|(href, icon_name, title)| {
                        let link_style = link_style.clone();
                        let class = move || {
                            if is_active(&pathname.get(), href) {
                                "navbar__link navbar__link--active"
                            } else {
                                "navbar__link"
                            }
                        };
                        view! {
                            <li>
                                <a href=href class=class style=link_style>
                                    {icon(icon_name)}
                                    <span>{title}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/productos", "/"));
        assert!(is_active("/productos", "/productos"));
        assert!(is_active("/productos/3", "/productos"));
        assert!(!is_active("/productosx", "/productos"));
        assert!(!is_active("/categorias", "/productos"));
    }
}
