use lazy_static::lazy_static;

use crate::core::category::Category;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    pub category: Category,
    pub keywords: Vec<&'static str>,
}

impl KeywordSet {
    pub fn new(category: Category, keywords: Vec<&'static str>) -> Self {
        Self { category, keywords }
    }

    /// `text` must already be lowercased.
    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    pub fn first_match(&self, text: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|kw| text.contains(kw))
    }
}

lazy_static! {
    /// Wide keyword sets used to route a submitted query, in
    /// classification order.
    pub static ref CATEGORY_KEYWORDS: Vec<KeywordSet> = vec![
        KeywordSet::new(Category::Jobs, vec![
            "งาน", "หางาน", "สมัคร", "รับสมัคร", "ตำแหน่ง", "เงินเดือน", "พนักงาน",
            "ลูกจ้าง", "ครู", "พาร์ทไทม์", "ฟรีแลนซ์", "ประจำ", "อาชีพ", "เรซูเม่",
            "job", "work", "career", "hiring", "salary", "part-time", "freelance", "intern",
        ]),
        KeywordSet::new(Category::Market, vec![
            "ขาย", "ซื้อ", "สินค้า", "ตลาด", "ราคา", "มือสอง", "ของฝาก", "ผลไม้",
            "ผัก", "เสื้อผ้า", "โอทอป", "ส่งฟรี", "ลดราคา",
            "buy", "sell", "shop", "market", "product", "price", "otop", "sale",
        ]),
        KeywordSet::new(Category::Guides, vec![
            "เที่ยว", "ท่องเที่ยว", "ที่พัก", "โรงแรม", "รีสอร์ท", "โฮมสเตย์", "คาเฟ่",
            "กาแฟ", "ร้านอาหาร", "ที่กิน", "วัด", "กว๊าน", "น้ำตก", "ดอย", "อุทยาน",
            "จุดชมวิว", "travel", "trip", "hotel", "resort", "cafe", "coffee",
            "restaurant", "temple", "tour", "guide", "homestay",
        ]),
        KeywordSet::new(Category::Community, vec![
            "กระทู้", "ถาม", "ปรึกษา", "แนะนำ", "รีวิว", "ข่าว", "ประกาศ", "ชุมชน",
            "เพื่อน", "กิจกรรม", "แจ้ง", "forum", "post", "review", "news",
            "community", "question", "event", "help",
        ]),
    ];

    /// Narrow intent groups used to build typing suggestions, in display
    /// order.
    pub static ref SUGGESTION_GROUPS: Vec<KeywordSet> = vec![
        KeywordSet::new(Category::Jobs, vec!["งาน", "job", "สมัคร"]),
        KeywordSet::new(Category::Market, vec!["ขาย", "ซื้อ", "สินค้า", "ตลาด"]),
        KeywordSet::new(Category::Guides, vec!["เที่ยว", "คาเฟ่", "ที่พัก", "ร้าน", "ที่กิน"]),
        KeywordSet::new(Category::Community, vec!["กระทู้", "ถาม", "แนะนำ", "รีวิว"]),
    ];
}


pub fn keyword_set(category: Category) -> Option<&'static KeywordSet> {
    CATEGORY_KEYWORDS.iter().find(|set| set.category == category)
}
