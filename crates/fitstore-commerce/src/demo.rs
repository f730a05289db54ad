//! Static demo data loaded at startup.

use crate::address::Address;
use crate::catalog::{Category, Product};
use crate::chat::{ChatPost, ChatReply};
use crate::ids::{AddressId, ChatId, OrderId, ProductId, ReplyId, UserId};
use crate::money::Money;
use crate::orders::{Order, OrderItem, OrderStatus};
use chrono::{DateTime, TimeZone, Utc};

/// Demo buyer id, shared with the demo accounts.
pub const DEMO_BUYER_ID: &str = "user1";

/// Demo seller id, shared with the demo accounts.
pub const DEMO_SELLER_ID: &str = "seller1";

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    category: Category,
    price: i64,
    stock: u32,
    rating: f32,
    review_count: u32,
    brand: &str,
    weight: &str,
    flavors: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category,
        price: Money::rupees(price),
        stock,
        rating,
        review_count,
        image: format!("/images/products/{}.jpg", id),
        brand: brand.to_string(),
        weight: weight.to_string(),
        flavors: flavors.iter().map(|f| f.to_string()).collect(),
    }
}

/// The demo catalog, in display order.
pub fn products() -> Vec<Product> {
    use Category::*;
    vec![
        product(
            "1",
            "Ignite Pre-Workout",
            "High-stimulant pre-workout with caffeine and beta-alanine for explosive energy.",
            PreWorkout, 1899, 45, 4.6, 312, "Ignite Labs", "300 g",
            &["Blue Raspberry", "Fruit Punch", "Green Apple"],
        ),
        product(
            "2",
            "Gold Standard Whey Protein",
            "24 g of whey protein per serving to support muscle recovery and growth.",
            PostWorkout, 3499, 60, 4.8, 1204, "Optimum Nutrition", "2 kg",
            &["Double Rich Chocolate", "Vanilla Ice Cream"],
        ),
        product(
            "3",
            "Multivitamin Daily",
            "Complete daily multivitamin with zinc, magnesium and vitamin D3.",
            Supplements, 699, 120, 4.4, 540, "MuscleBlaze", "60 tablets",
            &[],
        ),
        product(
            "4",
            "Pump Matrix Stim-Free",
            "Caffeine-free pre-workout focused on nitric oxide and muscle pumps.",
            PreWorkout, 1599, 15, 4.3, 98, "Pump Matrix", "250 g",
            &["Watermelon", "Lemon Lime"],
        ),
        product(
            "5",
            "BCAA Recovery 2:1:1",
            "Branched-chain amino acids with electrolytes to reduce soreness after training.",
            PostWorkout, 1299, 35, 4.5, 421, "Scivation", "400 g",
            &["Mango", "Blue Raspberry"],
        ),
        product(
            "6",
            "Omega-3 Fish Oil",
            "Triple-strength omega-3 with EPA and DHA for heart and joint health.",
            Supplements, 899, 8, 4.7, 610, "Carbamide Forte", "90 softgels",
            &[],
        ),
        product(
            "7",
            "Creatine Monohydrate",
            "Micronized creatine monohydrate for strength and power output.",
            PostWorkout, 799, 80, 4.9, 2033, "Pure Labs", "250 g",
            &["Unflavored"],
        ),
        product(
            "8",
            "Focus Nootropic Pre-Workout",
            "Pre-workout with L-theanine and alpha-GPC for clean energy and focus.",
            PreWorkout, 2199, 25, 4.2, 77, "Cognitive Edge", "280 g",
            &["Peach Mango"],
        ),
        product(
            "9",
            "Mass Gainer Pro",
            "High-calorie gainer with complex carbs and 50 g protein per serving.",
            PostWorkout, 2799, 12, 4.1, 356, "MuscleTech", "3 kg",
            &["Chocolate", "Cookies and Cream"],
        ),
        product(
            "10",
            "Vitamin D3 + K2",
            "Vitamin D3 with K2 (MK-7) for bone strength and immunity.",
            Supplements, 549, 70, 4.6, 288, "HealthKart", "60 capsules",
            &[],
        ),
        product(
            "11",
            "Electrolyte Hydration Mix",
            "Sugar-free electrolyte powder to rehydrate during and after workouts.",
            PostWorkout, 649, 0, 4.0, 64, "Fast&Up", "200 g",
            &["Lemon", "Orange"],
        ),
        product(
            "12",
            "Ashwagandha Extract",
            "KSM-66 ashwagandha root extract to support stress relief and recovery.",
            Supplements, 599, 18, 4.5, 190, "Himalaya", "60 capsules",
            &[],
        ),
    ]
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or_default()
}

fn address(id: &str, street: &str, city: &str, state: &str, pincode: &str) -> Address {
    Address {
        id: AddressId::new(id),
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        pincode: pincode.to_string(),
        is_primary: true,
    }
}

fn item(product_id: &str, name: &str, quantity: u32, price: i64) -> OrderItem {
    OrderItem {
        product_id: ProductId::new(product_id),
        name: name.to_string(),
        quantity,
        price: Money::rupees(price),
    }
}

/// Primary address of the demo buyer.
pub fn buyer_address() -> Address {
    address("addr1", "221, MG Road", "Mumbai", "Maharashtra", "400001")
}

/// Demo orders, newest first.
pub fn orders() -> Vec<Order> {
    let mumbai = buyer_address();
    let pune = Address {
        is_primary: false,
        ..address("addr9", "14, FC Road", "Pune", "Maharashtra", "411004")
    };
    let blr = address("addr7", "88, Indiranagar 100ft Road", "Bengaluru", "Karnataka", "560038");

    vec![
        Order::new(
            OrderId::new("ORD1006"),
            UserId::new(DEMO_BUYER_ID),
            vec![item("1", "Ignite Pre-Workout", 1, 1899), item("7", "Creatine Monohydrate", 2, 799)],
            OrderStatus::Processing,
            at(2024, 3, 14, 10),
            mumbai.clone(),
        ),
        Order::new(
            OrderId::new("ORD1005"),
            UserId::new("user2"),
            vec![item("2", "Gold Standard Whey Protein", 1, 3499)],
            OrderStatus::Processing,
            at(2024, 3, 13, 18),
            blr.clone(),
        ),
        Order::new(
            OrderId::new("ORD1004"),
            UserId::new(DEMO_BUYER_ID),
            vec![item("6", "Omega-3 Fish Oil", 2, 899)],
            OrderStatus::Shipped,
            at(2024, 3, 10, 9),
            pune,
        )
        .with_expected_delivery(at(2024, 3, 15, 12)),
        Order::new(
            OrderId::new("ORD1003"),
            UserId::new("user3"),
            vec![item("9", "Mass Gainer Pro", 1, 2799), item("5", "BCAA Recovery 2:1:1", 1, 1299)],
            OrderStatus::Shipped,
            at(2024, 3, 8, 15),
            blr.clone(),
        )
        .with_expected_delivery(at(2024, 3, 12, 12)),
        Order::new(
            OrderId::new("ORD1002"),
            UserId::new(DEMO_BUYER_ID),
            vec![item("3", "Multivitamin Daily", 3, 699)],
            OrderStatus::Delivered,
            at(2024, 2, 28, 11),
            mumbai,
        )
        .with_delivery_date(at(2024, 3, 3, 17)),
        Order::new(
            OrderId::new("ORD1001"),
            UserId::new("user2"),
            vec![item("10", "Vitamin D3 + K2", 1, 549), item("12", "Ashwagandha Extract", 1, 599)],
            OrderStatus::Delivered,
            at(2024, 2, 20, 13),
            blr,
        )
        .with_delivery_date(at(2024, 2, 24, 16)),
    ]
}

/// Demo chat board, newest first.
pub fn chats() -> Vec<ChatPost> {
    vec![
        ChatPost {
            id: ChatId::new("chat3"),
            user_id: UserId::new("user3"),
            user_name: "Arjun Mehta".to_string(),
            message: "Is the stim-free pre-workout okay to take in the evening?".to_string(),
            timestamp: at(2024, 3, 12, 20),
            replies: vec![ChatReply {
                id: ReplyId::new("reply2"),
                user_id: UserId::new(DEMO_SELLER_ID),
                user_name: "FitStore Team".to_string(),
                message: "Yes, Pump Matrix Stim-Free has no caffeine, so it won't affect sleep.".to_string(),
                timestamp: at(2024, 3, 12, 21),
            }],
        },
        ChatPost {
            id: ChatId::new("chat2"),
            user_id: UserId::new(DEMO_BUYER_ID),
            user_name: "Rahul Sharma".to_string(),
            message: "Loved the creatine, mixes really well. Any restock date for the electrolyte mix?".to_string(),
            timestamp: at(2024, 3, 9, 14),
            replies: Vec::new(),
        },
        ChatPost {
            id: ChatId::new("chat1"),
            user_id: UserId::new("user2"),
            user_name: "Priya Nair".to_string(),
            message: "How should I time whey protein around my workouts?".to_string(),
            timestamp: at(2024, 3, 5, 8),
            replies: vec![ChatReply {
                id: ReplyId::new("reply1"),
                user_id: UserId::new(DEMO_SELLER_ID),
                user_name: "FitStore Team".to_string(),
                message: "Within an hour after training works well; one scoop with water or milk.".to_string(),
                timestamp: at(2024, 3, 5, 10),
            }],
        },
    ]
}
