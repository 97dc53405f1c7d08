//! Article preview body
//!
//! Styled entirely through the CSS variables set on the page root, so it has
//! no props of its own.

use dioxus::prelude::*;

use super::ui::Text;

#[component]
pub fn Article() -> Element {
    rsx! {
        article { class: "article",
            h1 { class: "article-title", "Портрет Западной Швейцарии" }
            p { class: "article-subtitle", "Примечание переводчика" }
            div { class: "article-body",
                p {
                    "Лёгкий утренний туман над Женевским озером рассеивается к полудню, \
                     открывая виноградники Лаво, спускающиеся террасами к самой воде."
                }
                p {
                    "Здесь говорят по-французски, пьют шасла и ездят на поездах, которые \
                     приходят минута в минуту. Города стоят близко друг к другу, но у \
                     каждого свой характер: строгая Женева, студенческая Лозанна, \
                     джазовый Монтрё."
                }
                p {
                    "Настройте шрифт, размер, цвета и ширину колонки в панели слева, чтобы \
                     увидеть, как меняется восприятие текста."
                }
            }
            Text { weight: 400, size: 12, "Фото: Женевское озеро, вид из Лаво" }
        }
    }
}
