//! UI string tables and the translation resolver
//!
//! One hand-written table per supported locale. Every key referenced by the
//! templates must exist in every table; the resolver still falls back to the
//! default locale and finally to the raw key, so a lookup never fails.

use super::DEFAULT_LOCALE;
use std::collections::HashMap;

/// Every string key the templates reference.
pub const UI_KEYS: &[&str] = &[
    "nav_home",
    "nav_quran",
    "nav_hadith",
    "nav_chat",
    "home_tagline",
    "read_quran",
    "explore_hadith",
    "search_placeholder",
    "search_no_results",
    "loading",
    "retry",
    "fetch_error",
    "not_found",
    "untranslated",
    "verses",
    "chapter",
    "hadiths",
    "chat_placeholder",
    "chat_send",
    "stats_title",
];

const AR: &[(&str, &str)] = &[
    ("nav_home", "الرئيسية"),
    ("nav_quran", "القرآن"),
    ("nav_hadith", "صحيح البخاري"),
    ("nav_chat", "المساعد"),
    ("home_tagline", "اكتشف القرآن الكريم وتعاليم النبي ﷺ بأكثر لغات العالم انتشارًا."),
    ("read_quran", "ابدأ القراءة"),
    ("explore_hadith", "تصفح الأحاديث"),
    ("search_placeholder", "ابحث في القرآن أو الأحاديث..."),
    ("search_no_results", "لا توجد نتائج"),
    ("loading", "جارٍ التحميل..."),
    ("retry", "أعد المحاولة"),
    ("fetch_error", "حدث خطأ أثناء التحميل. يرجى المحاولة مرة أخرى."),
    ("not_found", "غير موجود"),
    ("untranslated", "الترجمة غير متوفرة"),
    ("verses", "آيات"),
    ("chapter", "الباب"),
    ("hadiths", "أحاديث"),
    ("chat_placeholder", "اطرح سؤالك عن الإسلام..."),
    ("chat_send", "إرسال"),
    ("stats_title", "إحصاءات"),
];

const EN: &[(&str, &str)] = &[
    ("nav_home", "Home"),
    ("nav_quran", "Quran"),
    ("nav_hadith", "Sahih al-Bukhari"),
    ("nav_chat", "Assistant"),
    ("home_tagline", "Discover the Holy Quran and the teachings of the Prophet (ﷺ) in the world's most spoken languages."),
    ("read_quran", "Start reading"),
    ("explore_hadith", "Explore the hadiths"),
    ("search_placeholder", "Search the Quran or the hadiths..."),
    ("search_no_results", "No results found"),
    ("loading", "Loading..."),
    ("retry", "Retry"),
    ("fetch_error", "Something went wrong while loading. Please try again."),
    ("not_found", "Not found"),
    ("untranslated", "Translation unavailable"),
    ("verses", "verses"),
    ("chapter", "Chapter"),
    ("hadiths", "hadiths"),
    ("chat_placeholder", "Ask your question about Islam..."),
    ("chat_send", "Send"),
    ("stats_title", "Statistics"),
];

const FR: &[(&str, &str)] = &[
    ("nav_home", "Accueil"),
    ("nav_quran", "Coran"),
    ("nav_hadith", "Sahih al-Bukhari"),
    ("nav_chat", "Assistant"),
    ("home_tagline", "Découvrez le Saint Coran et les enseignements du Prophète (ﷺ) dans les langues les plus parlées du monde."),
    ("read_quran", "Commencer la lecture"),
    ("explore_hadith", "Explorer les hadiths"),
    ("search_placeholder", "Rechercher dans le Coran ou les hadiths..."),
    ("search_no_results", "Aucun résultat trouvé"),
    ("loading", "Chargement..."),
    ("retry", "Réessayer"),
    ("fetch_error", "Une erreur est survenue lors du chargement. Veuillez réessayer."),
    ("not_found", "Introuvable"),
    ("untranslated", "Traduction indisponible"),
    ("verses", "versets"),
    ("chapter", "Chapitre"),
    ("hadiths", "hadiths"),
    ("chat_placeholder", "Posez votre question sur l'Islam..."),
    ("chat_send", "Envoyer"),
    ("stats_title", "Statistiques"),
];

const ES: &[(&str, &str)] = &[
    ("nav_home", "Inicio"),
    ("nav_quran", "Corán"),
    ("nav_hadith", "Sahih al-Bujari"),
    ("nav_chat", "Asistente"),
    ("home_tagline", "Descubre el Sagrado Corán y las enseñanzas del Profeta (ﷺ) en los idiomas más hablados del mundo."),
    ("read_quran", "Comenzar la lectura"),
    ("explore_hadith", "Explorar los hadices"),
    ("search_placeholder", "Buscar en el Corán o en los hadices..."),
    ("search_no_results", "No se encontraron resultados"),
    ("loading", "Cargando..."),
    ("retry", "Reintentar"),
    ("fetch_error", "Se produjo un error al cargar. Inténtalo de nuevo."),
    ("not_found", "No encontrado"),
    ("untranslated", "Traducción no disponible"),
    ("verses", "versículos"),
    ("chapter", "Capítulo"),
    ("hadiths", "hadices"),
    ("chat_placeholder", "Haz tu pregunta sobre el Islam..."),
    ("chat_send", "Enviar"),
    ("stats_title", "Estadísticas"),
];

const HI: &[(&str, &str)] = &[
    ("nav_home", "होम"),
    ("nav_quran", "क़ुरआन"),
    ("nav_hadith", "सहीह अल-बुख़ारी"),
    ("nav_chat", "सहायक"),
    ("home_tagline", "दुनिया की सबसे अधिक बोली जाने वाली भाषाओं में पवित्र क़ुरआन और पैग़म्बर (ﷺ) की शिक्षाएँ खोजें।"),
    ("read_quran", "पढ़ना शुरू करें"),
    ("explore_hadith", "हदीसें देखें"),
    ("search_placeholder", "क़ुरआन या हदीसों में खोजें..."),
    ("search_no_results", "कोई परिणाम नहीं मिला"),
    ("loading", "लोड हो रहा है..."),
    ("retry", "पुनः प्रयास करें"),
    ("fetch_error", "लोड करते समय त्रुटि हुई। कृपया फिर से प्रयास करें।"),
    ("not_found", "नहीं मिला"),
    ("untranslated", "अनुवाद उपलब्ध नहीं"),
    ("verses", "आयतें"),
    ("chapter", "अध्याय"),
    ("hadiths", "हदीसें"),
    ("chat_placeholder", "इस्लाम के बारे में अपना प्रश्न पूछें..."),
    ("chat_send", "भेजें"),
    ("stats_title", "आँकड़े"),
];

const ZH: &[(&str, &str)] = &[
    ("nav_home", "首页"),
    ("nav_quran", "古兰经"),
    ("nav_hadith", "布哈里圣训实录"),
    ("nav_chat", "助手"),
    ("home_tagline", "以世界上使用最广的语言阅读《古兰经》与先知（ﷺ）的教诲。"),
    ("read_quran", "开始阅读"),
    ("explore_hadith", "浏览圣训"),
    ("search_placeholder", "搜索古兰经或圣训..."),
    ("search_no_results", "未找到结果"),
    ("loading", "加载中..."),
    ("retry", "重试"),
    ("fetch_error", "加载时出错，请重试。"),
    ("not_found", "未找到"),
    ("untranslated", "暂无译文"),
    ("verses", "节"),
    ("chapter", "章"),
    ("hadiths", "段圣训"),
    ("chat_placeholder", "请输入有关伊斯兰的问题..."),
    ("chat_send", "发送"),
    ("stats_title", "统计"),
];

const RU: &[(&str, &str)] = &[
    ("nav_home", "Главная"),
    ("nav_quran", "Коран"),
    ("nav_hadith", "Сахих аль-Бухари"),
    ("nav_chat", "Помощник"),
    ("home_tagline", "Откройте Священный Коран и наставления Пророка (ﷺ) на самых распространённых языках мира."),
    ("read_quran", "Начать чтение"),
    ("explore_hadith", "Изучить хадисы"),
    ("search_placeholder", "Поиск по Корану и хадисам..."),
    ("search_no_results", "Ничего не найдено"),
    ("loading", "Загрузка..."),
    ("retry", "Повторить"),
    ("fetch_error", "Ошибка загрузки. Попробуйте ещё раз."),
    ("not_found", "Не найдено"),
    ("untranslated", "Перевод недоступен"),
    ("verses", "аяты"),
    ("chapter", "Глава"),
    ("hadiths", "хадисы"),
    ("chat_placeholder", "Задайте вопрос об исламе..."),
    ("chat_send", "Отправить"),
    ("stats_title", "Статистика"),
];

const BN: &[(&str, &str)] = &[
    ("nav_home", "হোম"),
    ("nav_quran", "কুরআন"),
    ("nav_hadith", "সহিহ আল-বুখারি"),
    ("nav_chat", "সহায়ক"),
    ("home_tagline", "বিশ্বের সর্বাধিক কথিত ভাষায় পবিত্র কুরআন ও নবীজির (ﷺ) শিক্ষা আবিষ্কার করুন।"),
    ("read_quran", "পড়া শুরু করুন"),
    ("explore_hadith", "হাদিস দেখুন"),
    ("search_placeholder", "কুরআন বা হাদিসে অনুসন্ধান করুন..."),
    ("search_no_results", "কোনো ফলাফল পাওয়া যায়নি"),
    ("loading", "লোড হচ্ছে..."),
    ("retry", "আবার চেষ্টা করুন"),
    ("fetch_error", "লোড করার সময় ত্রুটি ঘটেছে। আবার চেষ্টা করুন।"),
    ("not_found", "পাওয়া যায়নি"),
    ("untranslated", "অনুবাদ নেই"),
    ("verses", "আয়াত"),
    ("chapter", "অধ্যায়"),
    ("hadiths", "হাদিস"),
    ("chat_placeholder", "ইসলাম সম্পর্কে আপনার প্রশ্ন করুন..."),
    ("chat_send", "পাঠান"),
    ("stats_title", "পরিসংখ্যান"),
];

const PT: &[(&str, &str)] = &[
    ("nav_home", "Início"),
    ("nav_quran", "Alcorão"),
    ("nav_hadith", "Sahih al-Bukhari"),
    ("nav_chat", "Assistente"),
    ("home_tagline", "Descubra o Sagrado Alcorão e os ensinamentos do Profeta (ﷺ) nos idiomas mais falados do mundo."),
    ("read_quran", "Começar a leitura"),
    ("explore_hadith", "Explorar os hadiths"),
    ("search_placeholder", "Pesquisar no Alcorão ou nos hadiths..."),
    ("search_no_results", "Nenhum resultado encontrado"),
    ("loading", "Carregando..."),
    ("retry", "Tentar novamente"),
    ("fetch_error", "Ocorreu um erro ao carregar. Tente novamente."),
    ("not_found", "Não encontrado"),
    ("untranslated", "Tradução indisponível"),
    ("verses", "versículos"),
    ("chapter", "Capítulo"),
    ("hadiths", "hadiths"),
    ("chat_placeholder", "Faça a sua pergunta sobre o Islão..."),
    ("chat_send", "Enviar"),
    ("stats_title", "Estatísticas"),
];

const UR: &[(&str, &str)] = &[
    ("nav_home", "صفحۂ اول"),
    ("nav_quran", "قرآن"),
    ("nav_hadith", "صحیح بخاری"),
    ("nav_chat", "معاون"),
    ("home_tagline", "دنیا کی سب سے زیادہ بولی جانے والی زبانوں میں قرآنِ کریم اور نبی کریم ﷺ کی تعلیمات دریافت کریں۔"),
    ("read_quran", "پڑھنا شروع کریں"),
    ("explore_hadith", "احادیث دیکھیں"),
    ("search_placeholder", "قرآن یا احادیث میں تلاش کریں..."),
    ("search_no_results", "کوئی نتیجہ نہیں ملا"),
    ("loading", "لوڈ ہو رہا ہے..."),
    ("retry", "دوبارہ کوشش کریں"),
    ("fetch_error", "لوڈ کرنے میں خرابی ہوئی۔ دوبارہ کوشش کریں۔"),
    ("not_found", "نہیں ملا"),
    ("untranslated", "ترجمہ دستیاب نہیں"),
    ("verses", "آیات"),
    ("chapter", "باب"),
    ("hadiths", "احادیث"),
    ("chat_placeholder", "اسلام کے بارے میں اپنا سوال پوچھیں..."),
    ("chat_send", "بھیجیں"),
    ("stats_title", "اعداد و شمار"),
];

const TABLES: &[(&str, &[(&str, &str)])] = &[
    ("ar", AR),
    ("en", EN),
    ("fr", FR),
    ("es", ES),
    ("hi", HI),
    ("zh", ZH),
    ("ru", RU),
    ("bn", BN),
    ("pt", PT),
    ("ur", UR),
];

/// UI string store with default-locale fallback
pub struct Translations {
    tables: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl Translations {
    pub fn new() -> Self {
        let tables = TABLES
            .iter()
            .map(|(code, entries)| (*code, entries.iter().copied().collect()))
            .collect();

        Self { tables }
    }

    /// Resolve a key for a locale: exact table, then the default locale's
    /// table, then the raw key itself. Never fails.
    pub fn resolve<'a>(&'a self, lang: &str, key: &'a str) -> &'a str {
        let base_lang = lang.split('-').next().unwrap_or(lang);

        self.tables
            .get(base_lang)
            .and_then(|t| t.get(key))
            .or_else(|| self.tables.get(DEFAULT_LOCALE).and_then(|t| t.get(key)))
            .copied()
            .unwrap_or(key)
    }

    /// The full table for a locale (default locale when unsupported), used
    /// to hand every string to a template in one shot.
    pub fn table(&self, lang: &str) -> HashMap<&'static str, &'static str> {
        let base_lang = lang.split('-').next().unwrap_or(lang);

        self.tables
            .get(base_lang)
            .or_else(|| self.tables.get(DEFAULT_LOCALE))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}
