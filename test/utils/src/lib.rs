pub fn itinerary_reply_fixture() -> &'static str {
    return r#"
Here is a 3-day plan for Netarhat, the Queen of Chotanagpur.

Day 1: Arrive in Netarhat by early afternoon. Check in, then head to Magnolia Point around 4:30 PM for the famous sunset. Carry a reusable water bottle and take your litter back with you.

Day 2: Start before dawn for the sunrise viewpoint. After breakfast visit the Upper Ghaghri Falls, and in the afternoon the Lower Ghaghri Falls, a short trek through sal forest.

Day 3: Visit the Netarhat Residential School dam in the morning, pick up wooden toys from local artisans as souvenirs, and depart after lunch.

Travel tip: hire a local car from Ranchi; the drive takes around four hours.
"#
    .trim();
}
