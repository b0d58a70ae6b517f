// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! English names for the 77 districts. The feed only carries Devanagari names.

use std::collections::HashMap;
use once_cell::sync::Lazy;
use results::constituency::Province;

// Keyed by the exact DistrictName strings in the feed; काठमाडौँ/काठमाडौं are
// alternate spellings of Kathmandu that both occur.
static DISTRICT_EN: Lazy<HashMap<&'static str,&'static str>> = Lazy::new(||HashMap::from([
    ("ताप्लेजुङ","Taplejung"),     ("पाँचथर","Panchthar"),        ("इलाम","Ilam"),
    ("सङ्खुवासभा","Sankhuwasabha"),("भोजपुर","Bhojpur"),          ("धनकुटा","Dhankuta"),
    ("तेह्रथुम","Terhathum"),      ("खोटाङ","Khotang"),           ("सोलुखुम्बु","Solukhumbu"),
    ("ओखलढुङ्गा","Okhaldhunga"),   ("झापा","Jhapa"),              ("मोरङ","Morang"),
    ("सुनसरी","Sunsari"),          ("उदयपुर","Udayapur"),         ("सप्तरी","Saptari"),
    ("सिरहा","Siraha"),            ("धनुषा","Dhanusha"),          ("महोत्तरी","Mahottari"),
    ("सर्लाही","Sarlahi"),         ("रौतहट","Rautahat"),          ("बारा","Bara"),
    ("पर्सा","Parsa"),             ("सिन्धुली","Sindhuli"),       ("रामेछाप","Ramechhap"),
    ("दोलखा","Dolakha"),           ("सिन्धुपाल्चोक","Sindhupalchok"),
    ("काभ्रेपलाञ्चोक","Kavrepalanchok"),
    ("भक्तपुर","Bhaktapur"),       ("ललितपुर","Lalitpur"),        ("काठमाडौँ","Kathmandu"),
    ("काठमाडौं","Kathmandu"),
    ("नुवाकोट","Nuwakot"),         ("मकवानपुर","Makwanpur"),      ("चितवन","Chitwan"),
    ("गोर्खा","Gorkha"),           ("लमजुङ","Lamjung"),           ("तनहुँ","Tanahu"),
    ("कास्की","Kaski"),            ("स्याङ्जा","Syangja"),        ("पर्वत","Parbat"),
    ("बाग्लुङ","Baglung"),         ("म्याग्दी","Myagdi"),         ("नवलपुर","Nawalpur"),
    ("मुस्ताङ","Mustang"),         ("मनाङ","Manang"),
    ("रूपन्देही","Rupandehi"),     ("कपिलवस्तु","Kapilvastu"),    ("अर्घाखाँची","Arghakhanchi"),
    ("गुल्मी","Gulmi"),            ("पाल्पा","Palpa"),            ("दाङ","Dang"),
    ("बाँके","Banke"),             ("बर्दिया","Bardiya"),         ("रोल्पा","Rolpa"),
    ("रुकुम पश्चिम","Rukum-West"), ("प्युठान","Pyuthan"),
    ("डोल्पा","Dolpa"),            ("मुगु","Mugu"),               ("हुम्ला","Humla"),
    ("जुम्ला","Jumla"),            ("कालिकोट","Kalikot"),         ("दैलेख","Dailekh"),
    ("जाजरकोट","Jajarkot"),        ("सल्यान","Salyan"),           ("रुकुम पूर्व","Rukum-East"),
    ("सुर्खेत","Surkhet"),
    ("बाजुरा","Bajura"),           ("बझाङ","Bajhang"),            ("दार्चुला","Darchula"),
    ("बैतडी","Baitadi"),           ("डडेलधुरा","Dadeldhura"),     ("डोटी","Doti"),
    ("अछाम","Achham"),             ("कैलाली","Kailali"),          ("कञ्चनपुर","Kanchanpur"),
]));

/// English name for a district, falling back to a province-based placeholder
/// for names the table doesn't know.
pub fn district_en(district_np:&str,state_id:u32) -> String {
    match DISTRICT_EN.get(district_np) {
        Some(en) => en.to_string(),
        None => {
            let province = Province::from_state_id(state_id).map(|p|p.name()).unwrap_or("Province");
            format!("{}-District",province)
        }
    }
}
