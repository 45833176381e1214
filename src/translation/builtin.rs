//! Built-in Turkish ↔ English vocabularies.
//!
//! Order matters for the substring fallback: more specific phrases come
//! before the shorter words they contain (`tavuk göğsü` before `tavuk`,
//! `eggplant` before `egg`).

/// Turkish ingredient phrases → English query terms.
pub const INGREDIENTS: &[(&str, &str)] = &[
    ("tavuk göğsü", "chicken breast"),
    ("tavuk but", "chicken thighs"),
    ("tavuk", "chicken"),
    ("kıyma", "ground beef"),
    ("dana eti", "beef"),
    ("kuzu eti", "lamb"),
    ("ton balığı", "tuna"),
    ("balık", "fish"),
    ("somon", "salmon"),
    ("karides", "shrimp"),
    ("sucuk", "sausage"),
    ("pastırma", "pastrami"),
    ("yumurta", "egg"),
    ("süt", "milk"),
    ("yoğurt", "yogurt"),
    ("tereyağı", "butter"),
    ("krema", "cream"),
    ("kaşar peyniri", "cheddar cheese"),
    ("beyaz peynir", "feta cheese"),
    ("peynir", "cheese"),
    ("domates", "tomato"),
    ("salça", "tomato paste"),
    ("salatalık", "cucumber"),
    ("karabiber", "black pepper"),
    ("pul biber", "red pepper flakes"),
    ("biber", "pepper"),
    ("soğan", "onion"),
    ("sarımsak", "garlic"),
    ("patates", "potato"),
    ("havuç", "carrot"),
    ("patlıcan", "eggplant"),
    ("kabak", "zucchini"),
    ("ıspanak", "spinach"),
    ("mantar", "mushroom"),
    ("marul", "lettuce"),
    ("lahana", "cabbage"),
    ("brokoli", "broccoli"),
    ("karnabahar", "cauliflower"),
    ("bezelye", "peas"),
    ("mısır", "corn"),
    ("nohut", "chickpeas"),
    ("kırmızı mercimek", "red lentils"),
    ("mercimek", "lentils"),
    ("fasulye", "beans"),
    ("pirinç", "rice"),
    ("bulgur", "bulgur"),
    ("makarna", "pasta"),
    ("ekmek", "bread"),
    ("şeker", "sugar"),
    ("tuz", "salt"),
    ("zeytinyağı", "olive oil"),
    ("sıvı yağ", "vegetable oil"),
    ("zeytin", "olive"),
    ("balkabağı", "pumpkin"),
    ("bal", "honey"),
    ("limon", "lemon"),
    ("elma", "apple"),
    ("muz", "banana"),
    ("çilek", "strawberry"),
    ("portakal", "orange"),
    ("ceviz", "walnut"),
    ("fındık", "hazelnut"),
    ("badem", "almond"),
    ("maydanoz", "parsley"),
    ("dereotu", "dill"),
    ("nane", "mint"),
    ("fesleğen", "basil"),
    ("kekik", "thyme"),
    ("kimyon", "cumin"),
    ("tarçın", "cinnamon"),
    ("avokado", "avocado"),
    ("kakao", "cocoa"),
    ("çikolata", "chocolate"),
    ("vanilya", "vanilla"),
    ("maya", "yeast"),
    ("kabartma tozu", "baking powder"),
    ("sirke", "vinegar"),
    ("un", "flour"),
];

/// English words found in recipe titles and ingredient names → Turkish.
pub const RECIPE_TERMS: &[(&str, &str)] = &[
    // cooking methods and descriptors
    ("grilled", "ızgara"),
    ("baked", "fırında"),
    ("fried", "kızarmış"),
    ("roasted", "kavrulmuş"),
    ("stuffed", "doldurulmuş"),
    ("boiled", "haşlanmış"),
    ("steamed", "buharda"),
    ("creamy", "kremalı"),
    ("spicy", "acılı"),
    ("sweet", "tatlı"),
    ("sour", "ekşi"),
    ("easy", "kolay"),
    ("quick", "hızlı"),
    ("homemade", "ev yapımı"),
    ("healthy", "sağlıklı"),
    ("vegetarian", "vejetaryen"),
    // dishes
    ("salad", "salata"),
    ("soup", "çorba"),
    ("stew", "yahni"),
    ("casserole", "güveç"),
    ("sauce", "sos"),
    ("cake", "kek"),
    ("cookies", "kurabiye"),
    ("omelette", "omlet"),
    ("omelet", "omlet"),
    ("sandwich", "sandviç"),
    ("pancakes", "krep"),
    ("pasta", "makarna"),
    ("bread", "ekmek"),
    // ingredients
    ("chicken", "tavuk"),
    ("breast", "göğüs"),
    ("beef", "dana eti"),
    ("lamb", "kuzu eti"),
    ("salmon", "somon"),
    ("tuna", "ton balığı"),
    ("fish", "balık"),
    ("shrimp", "karides"),
    ("eggplant", "patlıcan"),
    ("eggs", "yumurta"),
    ("egg", "yumurta"),
    ("cheese", "peynir"),
    ("milk", "süt"),
    ("butter", "tereyağı"),
    ("cream", "krema"),
    ("yogurt", "yoğurt"),
    ("tomatoes", "domates"),
    ("tomato", "domates"),
    ("potatoes", "patates"),
    ("potato", "patates"),
    ("onions", "soğan"),
    ("onion", "soğan"),
    ("garlic", "sarımsak"),
    ("peppers", "biber"),
    ("pepper", "biber"),
    ("carrots", "havuç"),
    ("carrot", "havuç"),
    ("spinach", "ıspanak"),
    ("mushrooms", "mantar"),
    ("mushroom", "mantar"),
    ("zucchini", "kabak"),
    ("rice", "pirinç"),
    ("flour", "un"),
    ("sugar", "şeker"),
    ("salt", "tuz"),
    ("lemon", "limon"),
    ("honey", "bal"),
    ("apple", "elma"),
    ("banana", "muz"),
    ("chocolate", "çikolata"),
    ("oil", "yağ"),
    // connectives
    ("with", "ile"),
    ("and", "ve"),
];
