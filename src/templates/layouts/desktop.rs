use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | 입찰 레이더" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {}
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "입찰 레이더" }
                    nav {
                        ul {
                            li { a href="/" { "대시보드" } }
                            li { a href="/radar" { "입찰 검색" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
