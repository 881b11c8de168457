//! Shared product page fixture for integration tests.

#![allow(dead_code)]

pub const PRODUCT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="utf-8">
    <title>Кроссовки Air Runner — Магазин Спорт</title>
    <meta name="keywords" content="кроссовки, бег , спорт">
    <meta name="description" content="Лёгкие кроссовки для бега">
    <meta property="og:title" content="Air Runner — Магазин Спорт">
    <meta property="og:image" content="https://shop.test/img/air.jpg">
    <meta property="og:type" content="product">
</head>
<body>
    <header><button class="like active">♥</button></header>
    <main>
        <section class="product" data-id="air-42">
            <div class="preview">
                <figure><img src="https://shop.test/img/air-main.jpg" alt="main"></figure>
                <nav>
                    <img src="https://shop.test/img/air-1s.jpg" data-src="https://shop.test/img/air-1.jpg" alt="Side">
                    <img src="https://shop.test/img/air-2s.jpg" data-src="https://shop.test/img/air-2.jpg" alt="Top">
                    <img src="https://shop.test/img/air-1s.jpg" data-src="https://shop.test/img/air-1.jpg" alt="Side">
                </nav>
            </div>
            <div class="about">
                <h1 class="title">  Air Runner  </h1>
                <div class="tags">
                    <span class="green">Обувь</span>
                    <span class="blue">Новинка</span>
                    <span class="red">Скидка</span>
                </div>
                <div class="price">
                    ₽1200
                    <span>₽1500</span>
                </div>
            </div>
            <ul class="properties">
                <li><span>Цвет</span><b>Белый</b></li>
                <li><span>Материал</span><b> Текстиль </b></li>
            </ul>
            <div class="description">
                <h3 class="unselectable">Описание</h3>
                <p>Кроссовки для ежедневных пробежек.</p>
            </div>
        </section>
        <section class="suggested">
            <article><img src="/s/a.jpg"><h3>Носки</h3><b>₽150</b><p>Хлопок</p></article>
            <article><img src="/s/b.jpg"><h3>Кепка</h3><b>$12.50</b><p>Летняя</p></article>
            <article><img src="/s/c.jpg"><h3>Бутылка</h3><b>€8</b><p>0,5 л</p></article>
        </section>
        <section class="reviews">
            <article>
                <div class="rating"><span class="filled"></span><span class="filled"></span><span class="filled"></span><span class="filled"></span><span></span></div>
                <div class="author"><img src="/u/1.png"><span>Анна</span><i>12/03/2024</i></div>
                <div class="title">Отличные</div>
                <p>Удобные и лёгкие.</p>
            </article>
            <article>
                <div class="rating"><span class="filled"></span><span class="filled"></span><span></span><span></span><span></span></div>
                <div class="author"><img src="/u/2.png"><span>Олег</span><i>01/02/2024</i></div>
                <div class="title">Маломерят</div>
                <p>Берите на размер больше.</p>
            </article>
        </section>
    </main>
</body>
</html>"#;

/// The fixture with one fragment replaced.
pub fn page_with(from: &str, to: &str) -> String {
    assert!(PRODUCT_PAGE.contains(from), "fixture has no {from:?}");
    PRODUCT_PAGE.replacen(from, to, 1)
}
