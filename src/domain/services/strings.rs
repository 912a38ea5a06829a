#[cfg(test)]
#[path = "strings_test.rs"]
mod tests;

use crate::domain::models::Intent;
use crate::domain::models::Locale;

/// Canned assistant lines in every display locale. These never go through the
/// translation backend; they ship with the binary.
pub struct UiStrings {}

impl UiStrings {
    /// Prefix for the error-notice turn appended when a backend call fails.
    /// The raw error text follows it.
    pub const ERROR_PREFIX: &'static str = "Sorry, something went wrong:";

    pub fn greeting(locale: Locale) -> &'static str {
        match locale {
            Locale::English => return "Welcome to the Jharkhand Tourism AI Assistant! How can I help you today?",
            Locale::Hindi => return "झारखंड पर्यटन एआई सहायक में आपका स्वागत है! मैं आज आपकी कैसे मदद कर सकता हूँ?",
            Locale::Bengali => return "ঝাড়খণ্ড পর্যটন এআই সহকারীতে আপনাকে স্বাগতম! আমি আজ আপনাকে কিভাবে সাহায্য করতে পারি?",
            Locale::Marathi => return "झारखंड पर्यटन एआय सहाय्यकामध्ये आपले स्वागत आहे! मी आज तुमची कशी मदत करू शकतो?",
            Locale::Telugu => return "జార్ఖండ్ టూరిజం AI అసిస్టెంట్‌కు స్వాగతం! ఈ రోజు నేను మీకు ఎలా సహాయపడగలను?",
            Locale::Tamil => return "ஜார்கண்ட் சுற்றுலா AI உதவியாளருக்கு வரவேற்கிறோம்! இன்று நான் உங்களுக்கு எப்படி உதவ முடியும்?",
        }
    }

    /// First canned line after an intent is selected.
    pub fn intent_opener(intent: Intent, locale: Locale) -> &'static str {
        match intent {
            Intent::Itinerary => match locale {
                Locale::English => return "I can help plan your trip! First, where in Jharkhand would you like to go?",
                Locale::Hindi => return "मैं आपकी यात्रा की योजना बनाने में मदद कर सकता हूँ! सबसे पहले, आप झारखंड में कहाँ जाना चाहेंगे?",
                Locale::Bengali => return "আমি আপনার ট্রিপ পরিকল্পনা করতে সাহায্য করতে পারি! প্রথমে, আপনি ঝাড়খণ্ডের কোথায় যেতে চান?",
                Locale::Marathi => return "मी तुमच्या प्रवासाचे नियोजन करण्यास मदत करू शकतो! प्रथम, तुम्हाला झारखंडमध्ये कोठे जायचे आहे?",
                Locale::Telugu => return "నేను మీ పర్యటనను ప్లాన్ చేయడంలో సహాయపడగలను! ముందుగా, మీరు జార్ఖండ్‌లో ఎక్కడికి వెళ్లాలనుకుంటున్నారు?",
                Locale::Tamil => return "உங்கள் பயணத்தைத் திட்டமிட நான் உதவ முடியும்! முதலில், ஜார்கண்டில் நீங்கள் எங்கு செல்ல விரும்புகிறீர்கள்?",
            },
            Intent::Souvenir => match locale {
                Locale::English => return "Looking for souvenirs? Ask me about specific categories like 'textiles' or 'metal crafts', or describe what you're looking for.",
                Locale::Hindi => return "स्मृति चिन्ह खोज रहे हैं? मुझसे 'कपड़ा' या 'धातु शिल्प' जैसी विशिष्ट श्रेणियों के बारे में पूछें, या आप जो खोज रहे हैं उसका वर्णन करें।",
                Locale::Bengali => return "স্মারক খুঁজছেন? আমাকে 'টেক্সটাইল' বা 'মেটাল ক্রাফ্টস'-এর মতো নির্দিষ্ট বিভাগ সম্পর্কে জিজ্ঞাসা করুন বা আপনি যা খুঁজছেন তা বর্ণনা করুন।",
                Locale::Marathi => return "स्मृतिचिन्हे शोधत आहात? मला 'कापड' किंवा 'धातू कला' यांसारख्या विशिष्ट श्रेणींबद्दल विचारा किंवा तुम्ही काय शोधत आहात याचे वर्णन करा.",
                Locale::Telugu => return "జ్ఞాపికల కోసం చూస్తున్నారా? 'వస్త్రాలు' లేదా 'లోహపు కైవినైలు' వంటి నిర్దిష్ట వర్గాల గురించి నన్ను అడగండి లేదా మీరు వెతుకుతున్న దాన్ని వివరించండి.",
                Locale::Tamil => return "நினைவுப்பொருட்களைத் தேடுகிறீர்களா? 'ஜவுளி' அல்லது 'உலோக கைவினைப்பொருட்கள்' போன்ற குறிப்பிட்ட வகைகளைப் பற்றி என்னிடம் கேளுங்கள் அல்லது நீங்கள் தேடுவதை விவரிக்கவும்.",
            },
            Intent::Location => match locale {
                Locale::English => return "I can suggest places to visit. Where in Jharkhand are you interested in?",
                Locale::Hindi => return "मैं घूमने के लिए जगहों का सुझाव दे सकता हूँ। झारखंड में आपकी रुचि कहाँ है?",
                Locale::Bengali => return "আমি ঘোরার জায়গা প্রস্তাব করতে পারি। ঝাড়খণ্ডে আপনি কোথায় আগ্রহী?",
                Locale::Marathi => return "मी भेट देण्यासाठी ठिकाणे सुचवू शकेन. तुम्हाला झारखंडमध्ये कोठे रस आहे?",
                Locale::Telugu => return "నేను సందర్శించడానికి స్థలాలను సూచించగలను. జార్ఖండ్‌లో మీకు ఎక్కడ ఆసక్తి ఉంది?",
                Locale::Tamil => return "நான் பார்வையிட இடங்களைப் பரிந்துரைக்க முடியும். ஜார்கண்டில் உங்களுக்கு எங்கு ஆர்வம்?",
            },
            Intent::Language => match locale {
                Locale::English => return "I can help with translations or common phrases. What would you like to know?",
                Locale::Hindi => return "मैं अनुवाद या सामान्य वाक्यांशों में मदद कर सकता हूँ। आप क्या जानना चाहेंगे?",
                Locale::Bengali => return "আমি অনুবাদ বা সাধারণ বাক্যাংশে সাহায্য করতে পারি। আপনি কি জানতে চান?",
                Locale::Marathi => return "मी भाषांतर किंवा सामान्य वाक्यांशांमध्ये मदत करू शकेन. तुम्हाला काय जाणून घ्यायला आवडेल?",
                Locale::Telugu => return "నేను అనువాదాలు లేదా సాధారణ పదబంధాలతో సహాయం చేయగలను. మీరు ఏమి తెలుసుకోవాలనుకుంటున్నారు?",
                Locale::Tamil => return "மொழிபெயர்ப்புகள் அல்லது பொதுவான சொற்றொடர்களுக்கு நான் உதவ முடியும். நீங்கள் என்ன தெரிந்து கொள்ள விரும்புகிறீர்கள்?",
            },
        }
    }

    /// Asked after the destination slot is filled.
    pub fn duration_prompt(locale: Locale) -> &'static str {
        match locale {
            Locale::English => return "Got it. And how many days will your trip be?",
            Locale::Hindi => return "समझ गया। और आपकी यात्रा कितने दिनों की होगी?",
            Locale::Bengali => return "বুঝেছি। আর আপনার ট্রিপ কত দিনের হবে?",
            Locale::Marathi => return "समजले. आणि तुमचा प्रवास किती दिवसांचा असेल?",
            Locale::Telugu => return "అర్థమైంది. మరియు మీ పర్యటన ఎన్ని రోజులు ఉంటుంది?",
            Locale::Tamil => return "புரிந்தது. உங்கள் பயணம் எத்தனை நாட்கள் இருக்கும்?",
        }
    }

    /// Asked after the duration slot is filled.
    pub fn interests_prompt(locale: Locale) -> &'static str {
        match locale {
            Locale::English => return "Perfect. What are you interested in? (e.g., temples, waterfalls, trekking, local culture)",
            Locale::Hindi => return "बढ़िया। आपकी रुचि किसमें है? (जैसे, मंदिर, झरने, ट्रेकिंग, स्थानीय संस्कृति)",
            Locale::Bengali => return "দারুণ। আপনি কিসে আগ্রহী? (যেমন, মন্দির, জলপ্রপাত, ট্রেকিং, স্থানীয় সংস্কৃতি)",
            Locale::Marathi => return "उत्तम. तुम्हाला कशात रस आहे? (उदा. मंदिरे, धबधबे, ट्रेकिंग, स्थानिक संस्कृती)",
            Locale::Telugu => return "అద్భుతం. మీకు దేనిపై ఆసక్తి ఉంది? (ఉదా. దేవాలయాలు, జలపాతాలు, ట్రేకింగ్, స్థానిక సంస్కృతి)",
            Locale::Tamil => return "அற்புதம். உங்களுக்கு எதில் ஆர்வம்? (எ.கா. கோவில்கள், நீர்வீழ்ச்சிகள், மலையேற்றம், உள்ளூர் கலாச்சாரம்)",
        }
    }

    /// Interim notice appended while the composed itinerary is generated.
    pub fn generating(locale: Locale) -> &'static str {
        match locale {
            Locale::English => return "Awesome! I'm creating a personalized itinerary for you now based on your preferences. This might take a moment...",
            Locale::Hindi => return "बहुत बढ़िया! मैं अब आपकी प्राथमिकताओं के आधार पर आपके लिए एक व्यक्तिगत यात्रा कार्यक्रम बना रहा हूँ। इसमें थोड़ा समय लग सकता है...",
            Locale::Bengali => return "অসাধারণ! আমি এখন আপনার পছন্দের উপর ভিত্তি করে আপনার জন্য একটি ব্যক্তিগত ভ্রমণসূচী তৈরি করছি। এতে কিছুক্ষণ সময় লাগতে পারে...",
            Locale::Marathi => return "अप्रतिम! मी आता तुमच्या पसंतीनुसार तुमच्यासाठी वैयक्तिक प्रवासाची योजना तयार करत आहे. याला थोडा वेळ लागू शकतो...",
            Locale::Telugu => return "అద్భుతం! నేను ఇప్పుడు మీ ప్రాధాన్యతల ఆధారంగా మీ కోసం వ్యక్తిగతీకరించిన ప్రయాణ ప్రణాళికను సృష్టిస్తున్నాను. దీనికి కొంత సమయం పట్టవచ్చు...",
            Locale::Tamil => return "அற்புதம்! உங்கள் விருப்பங்களின் அடிப்படையில் உங்களுக்காக ஒரு தனிப்பயனாக்கப்பட்ட பயணத்திட்டத்தை நான் இப்போது உருவாக்குகிறேன். இதற்கு சிறிது நேரம் ஆகலாம்...",
        }
    }
}
