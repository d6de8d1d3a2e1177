//! Built-in product list for the shop.

use apnaswaad_core::{Category, Price, Product, ProductId};

/// The sweets sold in the shop, in featured order.
#[must_use]
pub fn builtin_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Gulab Jamun",
            150,
            "/items/gulab_jamun.jpg",
            "Soft, spongy milk-solid balls soaked in sugar syrup.",
            "Sweet, syrupy, soft",
            Category::Traditional,
        ),
        product(
            2,
            "Rasgulla",
            140,
            "/items/rasgulla.jpg",
            "Spongy, juicy cottage cheese balls in light syrup.",
            "Sweet, juicy, spongy",
            Category::Traditional,
        ),
        product(
            3,
            "Jalebi",
            120,
            "/items/jalebi.jpg",
            "Crispy, spiral-shaped sweet soaked in sugar syrup.",
            "Crispy, syrupy, tangy-sweet",
            Category::Festive,
        ),
        product(
            4,
            "Barfi",
            160,
            "/items/barfi.jpg",
            "Rich, fudgy milk-based sweet, perfect for celebrations.",
            "Milky, sweet, rich",
            Category::Premium,
        ),
        product(
            5,
            "Kaju Katli",
            200,
            "/items/kaju_katli.jpg",
            "Diamond-shaped cashew sweet with silver leaf.",
            "Nutty, smooth, mildly sweet",
            Category::Premium,
        ),
        product(
            6,
            "Peda",
            130,
            "/items/peda.jpg",
            "Traditional milk-based sweet flavored with cardamom.",
            "Milky, cardamom, soft",
            Category::Traditional,
        ),
        product(
            7,
            "Sandesh",
            170,
            "/items/sandesh.jpg",
            "Bengali delicacy made from fresh cottage cheese.",
            "Soft, light, sweet",
            Category::Regional,
        ),
        product(
            8,
            "Soan Papdi",
            110,
            "/items/soan_papdi.jpg",
            "Flaky, melt-in-mouth sweet with nutty flavor.",
            "Flaky, nutty, sweet",
            Category::Festive,
        ),
        product(
            9,
            "Rasmalai",
            190,
            "/items/rasmalai.jpg",
            "Soft rasgullas soaked in creamy saffron milk.",
            "Creamy, sweet, saffron-rich",
            Category::Premium,
        ),
        product(
            10,
            "Rasmadhuri",
            100,
            "/items/rasmadhuri.jpg",
            "An indulgent twist on rasgulla, Rasmadhuri is a soft, juicy cottage cheese sweet filled with creamy saffron-infused stuffing, soaked in rich flavored milk.",
            "Creamy, sweet, saffron-rich",
            Category::Specialty,
        ),
        product(
            11,
            "Cham Cham",
            180,
            "/items/cham_cham.jpg",
            "Bengali sweet stuffed with cream and coated with coconut or dry fruits.",
            "Juicy, creamy, coconutty",
            Category::Regional,
        ),
        product(
            12,
            "Besan Laddoo",
            140,
            "/items/besan.jpg",
            "Classic laddus made from roasted gram flour, ghee, and sugar.",
            "Nutty, ghee-rich, sweet",
            Category::Traditional,
        ),
        product(
            13,
            "Motichoor Laddoo",
            150,
            "/items/motichoor_laddoo.jpg",
            "Tiny, pearl-shaped boondis mixed with sugar syrup and formed into balls.",
            "Sweet, melt-in-mouth, aromatic",
            Category::Festive,
        ),
        product(
            14,
            "Kesar Pista Barfi",
            220,
            "/items/kesar_pista_barfi.jpg",
            "Premium barfi infused with saffron and pistachios.",
            "Rich, nutty, saffron-kissed",
            Category::Premium,
        ),
        product(
            15,
            "Malai Peda",
            170,
            "/items/malai_peda.jpg",
            "Creamy milk peda with a rich, smooth texture.",
            "Milky, creamy, cardamom",
            Category::Premium,
        ),
        product(
            16,
            "Kalakand",
            160,
            "/items/kalakand.jpg",
            "Soft milk cake with a granular texture, sweetened perfectly.",
            "Milky, grainy, sweet",
            Category::Traditional,
        ),
        product(
            17,
            "Mysore Pak",
            180,
            "/items/mysore_pak.jpg",
            "South Indian delicacy made with ghee, sugar, and gram flour.",
            "Buttery, crumbly, sweet",
            Category::Regional,
        ),
        product(
            18,
            "Coconut Barfi",
            140,
            "/items/coconut_barfi.jpg",
            "Fresh coconut mixed with milk and sugar, pressed into squares.",
            "Coconutty, sweet, soft",
            Category::Traditional,
        ),
        product(
            19,
            "Anjeer Barfi",
            250,
            "/items/anjeer_barfi.jpg",
            "Premium barfi made with figs and nuts, a healthy indulgence.",
            "Fruity, nutty, rich",
            Category::Premium,
        ),
        product(
            20,
            "Milk Cake",
            190,
            "/items/milk_cake.jpg",
            "Dense, fudgy milk sweet with a caramelized flavor.",
            "Rich, creamy, caramelized",
            Category::Premium,
        ),
    ]
}

fn product(
    id: i32,
    name: &str,
    price: u64,
    image: &str,
    description: &str,
    flavor: &str,
    category: Category,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price),
        image: image.to_string(),
        description: description.to_string(),
        flavor: flavor.to_string(),
        category,
    }
}
